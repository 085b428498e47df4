use matcher_framework::{
    char_class, characters, choice, digit, digits, literal, one_or_more, whitespace, zero_or_more,
};
use parser_framework::{matcher, to_integer, CharClass, Node, NodeTag, Parser, TextSlice};
use rstest::rstest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum TestTag {
    Choices,
    Expr,
    Integer,
    IntList,
    Literal,
    Op,
    Var,
}

impl NodeTag for TestTag {}

type TestNode = Node<TestTag>;

fn atom(tag: TestTag, value: impl Into<parser_framework::Value>) -> TestNode {
    Node::atom(tag, value)
}

/// The assignment grammar: `VAR OP INTEGER (',' INTEGER)*`, optionally in braces.
struct Grammar {
    space: Parser<TextSlice>,
    var: Parser<TestNode>,
    op: Parser<TestNode>,
    integer: Parser<TestNode>,
    int_list: Parser<TestNode>,
    expr: Parser<TestNode>,
    block: Parser<TestNode>,
    choices: Parser<TestNode>,
}

impl Grammar {
    fn new() -> Self {
        let space = matcher(zero_or_more(whitespace()));

        let var = matcher(one_or_more(char_class(CharClass::LOWERCASE)))
            .prefix(&space)
            .map(|v| atom(TestTag::Var, v));

        let op = matcher(choice([literal("="), literal("!=")]))
            .prefix(&space)
            .map(|v| atom(TestTag::Op, v));

        let integer = matcher(digits())
            .prefix(&space)
            .map(|v| atom(TestTag::Integer, to_integer(&v)));

        let comma = matcher(characters(&[','])).prefix(&space);

        let int_list = integer
            .separated(&comma)
            .map(|items| Node::structure(TestTag::IntList, items));

        let expr = {
            let op = op.clone();
            let int_list = int_list.clone();
            var.flat_map(move |v| {
                let int_list = int_list.clone();
                op.flat_map(move |o| {
                    let v = v.clone();
                    int_list.map(move |i| Node::structure(TestTag::Expr, [v.clone(), o.clone(), i]))
                })
            })
        };

        let left = matcher(characters(&['{'])).prefix(&space);
        let right = matcher(characters(&['}'])).prefix(&space);
        let block = expr.prefix(&left).suffix(&right);

        let one_choice = matcher(literal("abc"))
            .or(&matcher(literal("def")))
            .or(&matcher(literal("ghi")))
            .prefix(&space)
            .map(|c| atom(TestTag::Literal, c));
        let choices = one_choice
            .separated(&space)
            .map(|c| Node::structure(TestTag::Choices, c));

        Self {
            space,
            var,
            op,
            integer,
            int_list,
            expr,
            block,
            choices,
        }
    }
}

#[test]
fn test_many() {
    let (items, _) = matcher(digit()).zero_or_more().parse_str("123").unwrap();
    assert_eq!(items, vec!["1", "2", "3"]);

    let (items, _) = matcher(digit()).one_or_more().parse_str("123").unwrap();
    assert_eq!(items, vec!["1", "2", "3"]);

    assert!(matcher(digit()).one_or_more().parse_str("").is_none());

    let (items, rest) = matcher(digit()).zero_or_more().parse_str("").unwrap();
    assert!(items.is_empty());
    assert!(rest.is_empty());

    let (value, _) = matcher(digits()).parse_str("123").unwrap();
    assert_eq!(value, "123");
}

#[test]
fn test_typed_parser() {
    let g = Grammar::new();

    let (node, _) = g.var.parse_str(" num").unwrap();
    assert_eq!(node, atom(TestTag::Var, "num"));

    let (node, rest) = g.expr.parse_str("number = 123").unwrap();
    assert_eq!(
        node,
        Node::structure(
            TestTag::Expr,
            [
                atom(TestTag::Var, "number"),
                atom(TestTag::Op, "="),
                Node::structure(TestTag::IntList, [atom(TestTag::Integer, 123u64)]),
            ]
        )
    );
    assert!(rest.is_empty());

    let (node, rest) = g.block.parse_str(" { number != 123, 456, 789 } ").unwrap();
    assert_eq!(
        node,
        Node::structure(
            TestTag::Expr,
            [
                atom(TestTag::Var, "number"),
                atom(TestTag::Op, "!="),
                Node::structure(
                    TestTag::IntList,
                    [
                        atom(TestTag::Integer, 123u64),
                        atom(TestTag::Integer, 456u64),
                        atom(TestTag::Integer, 789u64),
                    ]
                ),
            ]
        )
    );
    assert_eq!(rest, " ");

    let (node, _) = g.int_list.parse_str(" 1, 2 , 3,\n4, 5").unwrap();
    assert_eq!(
        node,
        Node::structure(
            TestTag::IntList,
            (1u64..=5).map(|n| atom(TestTag::Integer, n))
        )
    );

    let (node, _) = g.choices.parse_str("  def   abc  def   ghi").unwrap();
    assert_eq!(
        node,
        Node::structure(
            TestTag::Choices,
            ["def", "abc", "def", "ghi"].map(|s| atom(TestTag::Literal, s))
        )
    );
}

#[test]
fn test_simple_assignment() {
    let g = Grammar::new();
    let op = g.op.clone();
    let integer = g.integer.clone();
    let assignment = g.var.flat_map(move |v| {
        let integer = integer.clone();
        op.flat_map(move |o| {
            let v = v.clone();
            integer.map(move |i| Node::structure(TestTag::Expr, [v.clone(), o.clone(), i]))
        })
    });

    let (node, _) = assignment.parse_str("number = 123").unwrap();
    assert_eq!(
        node,
        Node::structure(
            TestTag::Expr,
            [
                atom(TestTag::Var, "number"),
                atom(TestTag::Op, "="),
                atom(TestTag::Integer, 123u64),
            ]
        )
    );
}

#[test]
fn test_failures_are_values() {
    let g = Grammar::new();
    assert!(g.expr.parse_str("number 123").is_none());
    assert!(g.expr.parse_str("= 123").is_none());
    assert!(g.block.parse_str("{ n = 1").is_none());
    assert!(g.int_list.parse_str(",1").is_none());
}

#[rstest]
#[case("n = 1", Some(""))]
#[case("n = 1 rest", Some(" rest"))]
#[case("abc != 4, 5;", Some(";"))]
#[case("n =", None)]
#[case("N = 1", None)]
#[case("n == 1", None)]
fn test_expr_remainder(#[case] input: &str, #[case] rest: Option<&str>) {
    let g = Grammar::new();
    let parsed = g.expr.parse_str(input);
    assert_eq!(parsed.as_ref().map(|(_, r)| r.as_str()), rest);
}

#[test]
fn test_separated_leaves_trailing_delimiter() {
    let g = Grammar::new();
    let (node, rest) = g.int_list.parse_str("1, 2,").unwrap();
    assert_eq!(node.children().len(), 2);
    assert_eq!(rest, ",");
}

#[test]
fn test_or_backtracks_to_original_input() {
    let x_then_ab = matcher(literal("ab")).prefix(&matcher(literal("x")));
    let parser = x_then_ab.or(&matcher(literal("xy")));
    let (value, rest) = parser.parse_str("xyz").unwrap();
    assert_eq!(value, "xy");
    assert_eq!(rest, "z");
}

#[test]
fn test_or_default_is_total() {
    let parser = matcher(digits()).or_default(TextSlice::from("0"));
    let (value, rest) = parser.parse_str("abc").unwrap();
    assert_eq!(value, "0");
    assert_eq!(rest, "abc");

    let (value, rest) = parser.parse_str("42abc").unwrap();
    assert_eq!(value, "42");
    assert_eq!(rest, "abc");
}

#[test]
fn test_prefix_and_suffix_discard_values() {
    let g = Grammar::new();
    let quoted = g
        .integer
        .prefix(&matcher(literal("<")))
        .suffix(&matcher(literal(">")));
    let (node, rest) = quoted.parse_str("<7>!").unwrap();
    assert_eq!(node, atom(TestTag::Integer, 7u64));
    assert_eq!(rest, "!");
    assert!(quoted.parse_str("<7").is_none());

    // The space parser never fails, so it is a valid prefix on any input
    assert!(g.integer.prefix(&g.space).parse_str("9").is_some());
}

#[test]
fn test_optional_production_stays_out_of_tree() {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Plural {
        Expr,
        Operand,
        ModOp,
        RelOp,
        Integer,
    }
    impl NodeTag for Plural {}

    let spaces = matcher(zero_or_more(whitespace()));
    let operand = matcher(characters(&['n', 'i', 'v', 'w', 'f', 't']))
        .prefix(&spaces)
        .map(|v| Node::atom(Plural::Operand, v));
    let modop = {
        let digits_value = matcher(digits()).prefix(&spaces);
        matcher(characters(&['%']))
            .prefix(&spaces)
            .flat_map(move |_| {
                digits_value.map(|v| Node::atom(Plural::ModOp, to_integer(&v)))
            })
    };
    let relop = matcher(choice([characters(&['=']), literal("!=")]))
        .prefix(&spaces)
        .map(|v| Node::atom(Plural::RelOp, v));
    let integer = matcher(digits())
        .prefix(&spaces)
        .map(|v| Node::atom(Plural::Integer, to_integer(&v)));

    let expr = operand.flat_map(move |o| {
        let relop = relop.clone();
        let integer = integer.clone();
        modop.map(Some).or_default(None).flat_map(move |m| {
            let o = o.clone();
            let integer = integer.clone();
            relop.flat_map(move |op| {
                let (o, m) = (o.clone(), m.clone());
                integer.map(move |r| {
                    Node::builder(Plural::Expr)
                        .add(o.clone())
                        .add_not_null(m.clone())
                        .add(op.clone())
                        .add(r)
                        .build()
                })
            })
        })
    });

    let (node, _) = expr.parse_str("n % 1000 != 350").unwrap();
    assert_eq!(
        node,
        Node::structure(
            Plural::Expr,
            [
                Node::atom(Plural::Operand, "n"),
                Node::atom(Plural::ModOp, 1000u64),
                Node::atom(Plural::RelOp, "!="),
                Node::atom(Plural::Integer, 350u64),
            ]
        )
    );

    let (node, _) = expr.parse_str("i = 1").unwrap();
    assert_eq!(node.children().len(), 3);
    assert_eq!(node.children()[1], Node::atom(Plural::RelOp, "="));
}

#[test]
fn test_parsers_are_shareable() {
    let g = Grammar::new();
    let expr = g.expr.clone();
    let handles: Vec<_> = (0..4u64)
        .map(|n| {
            let expr = expr.clone();
            std::thread::spawn(move || {
                let input = format!("x = {}", n);
                expr.parse_str(&input).map(|(node, _)| node)
            })
        })
        .collect();
    for (n, handle) in handles.into_iter().enumerate() {
        let node = handle.join().unwrap().unwrap();
        assert_eq!(
            node.children()[2],
            Node::structure(TestTag::IntList, [atom(TestTag::Integer, n as u64)])
        );
    }
}
