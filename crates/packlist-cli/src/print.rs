//! Scan execution and console rendering.

use std::time::Instant;

use anyhow::bail;
use console::Style;

use packlist_core::{scan, MatchDecision, MatcherContext, RealFs, ScanOptions};

use crate::sorting::folders_first;
use crate::ScanArgs;

pub fn run_scan(args: ScanArgs) -> anyhow::Result<()> {
    let root = args.path.clone().unwrap_or_else(|| ".".into());
    let target = args.target.target();

    let options = ScanOptions {
        depth: args.depth,
        invert: args.invert,
        fast_depth: args.fast_depth,
        fast_internal: args.fast_internal,
        cancel: None,
    };

    let styles = Styles::new(!args.no_color && !args.parsable);
    if !args.parsable {
        let verb = if args.invert { "ignores" } else { "includes" };
        println!("{} {verb}..", styles.target.apply_to(args.target));
        println!();
    }

    let start = Instant::now();
    let fs = RealFs::new(&root);
    let ctx = scan(&fs, &target, &options);
    let elapsed = start.elapsed();

    report_broken_sources(&ctx, &styles);
    if ctx.failed {
        // A partial listing from a failed scan is not trustworthy;
        // don't present it.
        bail!(
            "scan failed: {} broken source(s)",
            ctx.failed_sources.len()
        );
    }

    let mut paths: Vec<&str> = ctx.paths.keys().map(String::as_str).collect();
    paths.sort_by(|a, b| folders_first(a, b));

    for path in &paths {
        let mut line = (*path).to_string();
        if let Some(dir) = path.strip_suffix('/') {
            if let Some(count) = ctx.depth_paths.get(dir) {
                if *count > 0 && !args.parsable {
                    line.push_str(&format!("...{}", styles.dim.apply_to(format!("+{count}"))));
                }
            }
        }
        if args.show_sources && !args.parsable {
            let origin = decision_origin(&ctx.paths[*path]);
            line.push_str(&format!("  {}", styles.dim.apply_to(format!("< {origin}"))));
        }
        println!("{line}");
    }

    if !args.parsable {
        println!();
        println!(
            "{} files - {:.2?}",
            styles.number.apply_to(ctx.total_matched_files),
            elapsed
        );
        println!(
            "Looked through {} files and {} dirs",
            styles.number.apply_to(ctx.total_files),
            styles.number.apply_to(ctx.total_dirs)
        );
        if !target.hint.is_empty() {
            println!();
            println!(
                "You can use {} to check if the list is valid.",
                styles.hint.apply_to(format!("'{}'", target.hint))
            );
        }
    }

    Ok(())
}

/// Where a decision came from, for `--show-sources`.
fn decision_origin(decision: &MatchDecision) -> String {
    match decision {
        MatchDecision::Internal { pattern, .. } => format!("internal: {pattern}"),
        MatchDecision::External { source, pattern, .. } => {
            format!("{}: {pattern}", source.path)
        }
        MatchDecision::NoMatch { .. } => "default".to_string(),
        MatchDecision::MissingSource => "no source".to_string(),
        MatchDecision::BrokenSource { source } => format!("broken: {}", source.path),
        MatchDecision::InvalidPattern { source, .. } => format!("invalid: {}", source.path),
        MatchDecision::InvalidInternalPattern { error } => {
            format!("invalid internal: {}", error.pattern())
        }
    }
}

fn report_broken_sources(ctx: &MatcherContext, styles: &Styles) {
    if ctx.failed_sources.is_empty() {
        return;
    }
    let plural = if ctx.failed_sources.len() == 1 {
        "error"
    } else {
        "errors"
    };
    eprintln!(
        "{}",
        styles
            .error
            .apply_to(format!("{} {plural}", ctx.failed_sources.len()))
    );
    for source in &ctx.failed_sources {
        if let Some(err) = &source.error {
            eprintln!("{}", styles.error.apply_to(err));
        } else {
            eprintln!("{}", styles.error.apply_to(&source.path));
        }
    }
}

struct Styles {
    target: Style,
    number: Style,
    error: Style,
    hint: Style,
    dim: Style,
}

impl Styles {
    fn new(colored: bool) -> Self {
        let base = |style: Style| {
            if colored {
                style
            } else {
                Style::new()
            }
        };
        Self {
            target: base(Style::new().cyan().bold()),
            number: base(Style::new().green()),
            error: base(Style::new().red()),
            hint: base(Style::new().magenta()),
            dim: base(Style::new().dim()),
        }
    }
}
