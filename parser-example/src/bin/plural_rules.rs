//! Plural rule parser
//!
//! Parses CLDR-style plural conditions such as `n % 10 = 1 and n % 100 != 11`
//! into a tree. Each rule is first checked with a plain recognizer; only rules
//! that pass are parsed into nodes.
//!
//! ```text
//! RULE      := CONDITION (LOGIC CONDITION)*
//! CONDITION := OPERAND ('%' INTEGER)? RELOP RANGE (',' RANGE)*
//! RANGE     := INTEGER ('..' INTEGER)?
//! ```
//!
//! Usage: `plural-rules [RULE]...`. Without arguments a built-in set is used.

use clap::Parser as CliParser;
use matcher_framework::{
    characters, choice, digits, literal, sequence, whitespace, zero_or_more, Recognizer,
};
use parser_framework::{matcher, to_integer, Node, NodeTag, Parser, Position, Printer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Plural {
    Rule,
    Condition,
    Operand,
    ModOp,
    RelOp,
    Ranges,
    Range,
    Integer,
    Logic,
}

impl NodeTag for Plural {}

const OPERANDS: [char; 6] = ['n', 'i', 'v', 'w', 'f', 't'];

const DEFAULT_RULES: [&str; 5] = [
    "n = 1",
    "i = 0,1",
    "n % 10 = 1 and n % 100 != 11",
    "n % 10 = 2..4 and n % 100 != 12..14",
    "v = 0 and i % 10 = 1 or f % 10 = 1",
];

/// Command-line arguments.
#[derive(Debug, CliParser)]
#[command(name = "plural-rules", about = "Recognize and parse plural rule conditions.")]
struct Args {
    /// Rules to parse, e.g. "n % 10 = 1 and n % 100 != 11".
    rules: Vec<String>,
}

impl Args {
    /// The rules to run: those given, or the built-in set.
    fn rules(self) -> Vec<String> {
        if self.rules.is_empty() {
            DEFAULT_RULES.iter().map(|s| s.to_string()).collect()
        } else {
            self.rules
        }
    }
}

struct Grammar {
    recognizer: Recognizer,
    parser: Parser<Node<Plural>>,
}

impl Grammar {
    fn new() -> Self {
        Self {
            recognizer: Self::recognizer(),
            parser: Self::parser(),
        }
    }

    fn recognizer() -> Recognizer {
        let space = zero_or_more(whitespace());
        let tok = |r: Recognizer| sequence([space.clone(), r]);
        let optional = |r: Recognizer| choice([r, sequence(Vec::<Recognizer>::new())]);

        let range = sequence([
            tok(digits()),
            optional(sequence([literal(".."), digits()])),
        ]);
        let condition = sequence([
            tok(characters(&OPERANDS)),
            optional(sequence([tok(characters(&['%'])), tok(digits())])),
            tok(choice([characters(&['=']), literal("!=")])),
            range.clone(),
            zero_or_more(sequence([tok(characters(&[','])), range])),
        ]);
        let logic = tok(choice([literal("and"), literal("or")]));

        sequence([
            condition.clone(),
            zero_or_more(sequence([logic, condition])),
            space,
        ])
    }

    fn parser() -> Parser<Node<Plural>> {
        let space = matcher(zero_or_more(whitespace()));
        let token = |r| matcher(r).prefix(&space);

        let integer = token(digits()).map(|v| Node::atom(Plural::Integer, to_integer(&v)));
        let operand = token(characters(&OPERANDS)).map(|v| Node::atom(Plural::Operand, v));
        let relop =
            token(choice([characters(&['=']), literal("!=")])).map(|v| Node::atom(Plural::RelOp, v));
        let logic = token(choice([literal("and"), literal("or")])).map(|v| Node::atom(Plural::Logic, v));

        let modop = {
            let value = token(digits());
            token(characters(&['%']))
                .flat_map(move |_| {
                    value.map(|v| Some(Node::atom(Plural::ModOp, to_integer(&v))))
                })
                .or_default(None)
        };

        let range = {
            let upper = matcher(digits())
                .prefix(&matcher(literal("..")))
                .map(|v| Some(Node::atom(Plural::Integer, to_integer(&v))))
                .or_default(None);
            integer.flat_map(move |lo| {
                upper.map(move |hi| match hi {
                    Some(hi) => Node::structure(Plural::Range, [lo.clone(), hi]),
                    None => lo.clone(),
                })
            })
        };
        let ranges = range
            .separated(&token(characters(&[','])))
            .map(|items| Node::structure(Plural::Ranges, items));

        let condition = operand.flat_map(move |o| {
            let (relop, ranges) = (relop.clone(), ranges.clone());
            modop.flat_map(move |m| {
                let (o, ranges) = (o.clone(), ranges.clone());
                relop.flat_map(move |op| {
                    let (o, m) = (o.clone(), m.clone());
                    ranges.map(move |r| {
                        Node::builder(Plural::Condition)
                            .add(o.clone())
                            .add_not_null(m.clone())
                            .add(op.clone())
                            .add(r)
                            .build()
                    })
                })
            })
        });

        let tail = {
            let condition = condition.clone();
            logic
                .flat_map(move |l| condition.map(move |c| [l.clone(), c]))
                .zero_or_more()
        };
        condition
            .flat_map(move |first| {
                tail.map(move |rest| {
                    Node::builder(Plural::Rule)
                        .add(first.clone())
                        .extend(rest.into_iter().flatten())
                        .build()
                })
            })
            .suffix(&space)
    }
}

fn main() {
    let rules = Args::parse().rules();

    let grammar = Grammar::new();
    let printer = Printer::default();
    let mut failures = 0;

    for rule in &rules {
        println!("rule: {}", rule);

        match grammar.recognizer.recognize(rule) {
            Some(end) if end == rule.len() => {}
            Some(end) => {
                eprintln!(
                    "warning: unexpected input at {}: {:?}",
                    Position::locate(rule, end),
                    &rule[end..]
                );
                failures += 1;
                continue;
            }
            None => {
                eprintln!("warning: not a plural rule: {:?}", rule);
                failures += 1;
                continue;
            }
        }

        match grammar.parser.parse_str(rule) {
            Some((node, rest)) if rest.is_empty() => println!("{}\n", printer.print(&node)),
            Some((_, rest)) => {
                eprintln!(
                    "error: parser stopped at {} although the rule was recognized",
                    Position::locate(rule, rest.start())
                );
                failures += 1;
            }
            None => {
                eprintln!("error: parser rejected a recognized rule");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        eprintln!("{} of {} rules failed", failures, rules.len());
        std::process::exit(1);
    }
}
