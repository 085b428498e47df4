//! Assignment grammar example
//!
//! Builds a small grammar out of recognizers and parser combinators and
//! prints the tree for a few inputs:
//!
//! ```text
//! EXPR     := VAR OP INT_LIST
//! BLOCK    := '{' EXPR '}'
//! INT_LIST := INTEGER (',' INTEGER)*
//! OP       := '=' | '!='
//! ```
//!
//! Run with `cargo run --example simple_parser`.

use parser_framework::matcher_framework::{
    char_class, characters, choice, digits, literal, one_or_more, whitespace, zero_or_more,
};
use parser_framework::{matcher, to_integer, CharClass, Node, NodeTag, Parser, Printer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Tag {
    Expr,
    Var,
    Op,
    IntList,
    Integer,
}

impl NodeTag for Tag {
    fn label(&self) -> String {
        match self {
            Tag::Expr => "EXPR",
            Tag::Var => "VAR",
            Tag::Op => "OP",
            Tag::IntList => "INT_LIST",
            Tag::Integer => "INTEGER",
        }
        .to_string()
    }
}

fn block_parser() -> Parser<Node<Tag>> {
    let space = matcher(zero_or_more(whitespace()));
    let token = |r| matcher(r).prefix(&space);

    let var = token(one_or_more(char_class(CharClass::LOWERCASE))).map(|v| Node::atom(Tag::Var, v));
    let op = token(choice([literal("="), literal("!=")])).map(|v| Node::atom(Tag::Op, v));
    let integer = token(digits()).map(|v| Node::atom(Tag::Integer, to_integer(&v)));
    let int_list = integer
        .separated(&token(characters(&[','])))
        .map(|items| Node::structure(Tag::IntList, items));

    let expr = var.flat_map(move |v| {
        let int_list = int_list.clone();
        op.flat_map(move |o| {
            let v = v.clone();
            int_list.map(move |list| Node::structure(Tag::Expr, [v.clone(), o.clone(), list]))
        })
    });

    expr.prefix(&token(characters(&['{'])))
        .suffix(&token(characters(&['}'])))
        .or(&expr)
}

fn main() {
    let parser = block_parser();
    let printer = Printer::default();

    let inputs = ["number = 123", "{ count != 1, 2, 3 }", "x = 7, 8", "= 1", "{ y = 1"];

    for input in inputs {
        println!("input: {:?}", input);
        match parser.parse_str(input) {
            Some((node, rest)) => {
                println!("{}", printer.print(&node));
                if !rest.is_empty() {
                    println!("unparsed: {:?}", rest.as_str());
                }
            }
            None => println!("no match"),
        }
        println!();
    }
}
