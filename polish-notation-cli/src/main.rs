use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use polish_notation::converter::evaluator::evaluate_postfix;
use polish_notation::converter::syntax::expression_tree::Node;
use polish_notation::converter::three_address::{
    ast_to_quadruples, ast_to_triples, Quadruple, Triple,
};
use polish_notation::converter::variables::extract_variables;
use polish_notation::converter::{
    parse_expression, postfix_converter, prefix_converter, tokens_to_string,
};
use std::collections::HashMap;
use std::io;
use std::io::{BufRead, Write};

/// Converts infix expressions to polish notations and evaluates them
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to process; starts an interactive session when omitted
    expression: Option<String>,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    match args.expression {
        Some(expression) => process_expression(expression.trim(), &mut lines),
        None => run_interactive(&mut lines),
    }
}

fn run_interactive(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<()> {
    print_help();
    loop {
        prompt("expression> ")?;
        let line = match lines.next() {
            None => break, // end of input ends the session
            Some(line) => line?,
        };
        let input = line.trim();
        match input {
            "" => continue,
            "/q" => break,
            "/c" => clear_screen(),
            "/h" => print_help(),
            expression => {
                if let Err(error) = process_expression(expression, lines) {
                    println!("Error: {error:#}");
                }
            }
        }
    }
    Ok(())
}

fn process_expression(
    expression: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    let variables = extract_variables(expression)?;
    if variables.is_empty() {
        println!("No variables found.");
    } else {
        println!("Variables found: {}", variables.join(", "));
    }
    let values = collect_variable_values(&variables, lines)?;

    let tree = parse_expression(expression)?;
    debug!("parsed {expression:?} into a {tree:?} root");

    // An assignment only names the result; the converters run on its value.
    let (target, value_tree) = match &tree {
        Node::Assignment { target, value } => (Some(target.as_str()), value.as_ref()),
        other => (None, other),
    };

    print!("{value_tree}");

    let postfix = tokens_to_string(&postfix_converter::postfix_from_ast(value_tree)?);
    let prefix = tokens_to_string(&prefix_converter::prefix_from_ast(value_tree)?);
    println!("Postfix: {postfix}");
    println!("Prefix:  {prefix}");

    let triples = ast_to_triples(value_tree)?;
    print!("{}", render_triples(&triples));
    let quadruples = ast_to_quadruples(value_tree)?;
    print!("{}", render_quadruples(&quadruples));

    let result = evaluate_postfix(&postfix, &values)?;
    match target {
        Some(name) => println!("{name} = [{postfix}] = {result}"),
        None => println!("[{postfix}] = {result}"),
    }
    Ok(())
}

fn collect_variable_values(
    variables: &[String],
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<HashMap<String, f64>> {
    let mut values = HashMap::new();
    for name in variables {
        loop {
            prompt(&format!("  value for {name}: "))?;
            let line = lines
                .next()
                .context("input ended before all variables were given values")??;
            match line.trim().parse::<f64>() {
                Ok(value) => {
                    values.insert(name.clone(), value);
                    break;
                }
                Err(_) => println!("Invalid number, try again."),
            }
        }
    }
    Ok(values)
}

fn render_triples(triples: &[Triple]) -> String {
    let rows: Vec<Vec<String>> = triples
        .iter()
        .enumerate()
        .map(|(index, triple)| {
            vec![
                format!("({})", index + 1),
                triple.operator.to_string(),
                triple.first.clone(),
                triple.second.clone(),
            ]
        })
        .collect();
    render_table("Triples", &["Ref", "Operator", "Arg 1", "Arg 2"], &rows)
}

fn render_quadruples(quadruples: &[Quadruple]) -> String {
    let rows: Vec<Vec<String>> = quadruples
        .iter()
        .map(|quadruple| {
            vec![
                quadruple.operator.to_string(),
                quadruple.first.clone(),
                quadruple.second.clone(),
                quadruple.result.clone(),
            ]
        })
        .collect();
    render_table(
        "Quadruples",
        &["Operator", "Arg 1", "Arg 2", "Result"],
        &rows,
    )
}

fn render_table(title: &str, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|header| header.len()).collect();
    for row in rows {
        for (column, cell) in row.iter().enumerate() {
            widths[column] = widths[column].max(cell.len());
        }
    }

    let render_row = |cells: &[String]| -> String {
        let mut line = String::new();
        for (column, cell) in cells.iter().enumerate() {
            if column > 0 {
                line.push_str(" | ");
            }
            line.push_str(&format!("{:^width$}", cell, width = widths[column]));
        }
        line.push('\n');
        line
    };

    let header_cells: Vec<String> = headers.iter().map(|header| header.to_string()).collect();
    let separator: String = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("-+-")
        + "\n";

    let mut table = String::new();
    table.push_str(title);
    table.push('\n');
    table.push_str(&render_row(&header_cells));
    table.push_str(&separator);
    for row in rows {
        table.push_str(&render_row(row));
    }
    table
}

fn prompt(text: &str) -> Result<()> {
    print!("{text}");
    io::stdout().flush().context("failed to flush prompt")?;
    Ok(())
}

fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

fn print_help() {
    println!(
        "\
Enter an infix expression to convert it to polish notations and evaluate it.
Operators: + - * / ^ with parentheses; variables are prompted for a value.
  /q  quit
  /c  clear the screen
  /h  show this help"
    );
}
