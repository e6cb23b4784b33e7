use std::fs;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use credit_cli::config::load_options;
use credit_cli::logging::redact_value;
use credit_cli::pipeline::{FindOutput, FindRequest, resolve_schemas, run_find};
use credit_model::{FinderQuery, ResultSection};

use crate::cli::{ColumnsArgs, FindArgs};
use crate::summary::{print_report, print_schemas};

fn query_from_args(args: &FindArgs) -> FinderQuery {
    let query = match &args.student {
        Some(term) if !args.all => FinderQuery::search(term.trim()),
        _ => FinderQuery::all(),
    };
    query.with_missed_class(args.missed_class.as_deref())
}

pub fn run_find_command(args: &FindArgs) -> Result<FindOutput> {
    let span = info_span!("find");
    let _guard = span.enter();

    let mut options = load_options(args.config.as_deref())?;
    if let Some(occasion) = &args.occasion {
        options.occasion = Some(occasion.clone());
    }
    let request = FindRequest {
        classes: args.inputs.classes.clone(),
        students: args.inputs.students.clone(),
        query: query_from_args(args),
        options,
    };
    let output = run_find(&request)?;

    for section in &output.report.sections {
        if let ResultSection::Student {
            student, options, ..
        } = section
        {
            debug!(
                student_id = %student.id,
                name = %redact_value(&student.name),
                options = options.len(),
                "student reported"
            );
        }
    }

    if let Some(path) = &args.export {
        fs::write(path, &output.export_text)
            .with_context(|| format!("write export {}", path.display()))?;
        info!(path = %path.display(), "results exported");
    }
    Ok(output)
}

pub fn print_find_output(args: &FindArgs, output: &FindOutput) -> Result<()> {
    if args.json {
        let json = serde_json::to_string_pretty(&output.report).context("serialize report")?;
        println!("{json}");
    } else {
        print_report(&output.report);
    }
    if let Some(path) = &args.export {
        println!();
        println!("Results written to {}", path.display());
    }
    if args.message {
        println!();
        match &output.message {
            Some(message) => println!("{message}"),
            None => println!("No message: no student has an available class."),
        }
    }
    Ok(())
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let schemas = resolve_schemas(&args.inputs.classes, &args.inputs.students)?;
    if args.json {
        let json = serde_json::to_string_pretty(&schemas).context("serialize schemas")?;
        println!("{json}");
    } else {
        print_schemas(&schemas.classes, &schemas.students);
    }
    Ok(())
}
