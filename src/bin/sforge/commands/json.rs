use std::io::Write;

use anyhow::{Context, Result};

use stoich_forge::io::{Format, write_job_json};
use stoich_forge::{JobPlan, plan_jobs};

use crate::cli::JsonArgs;
use crate::config::build_job_config;
use crate::display::{Context as DisplayContext, Progress, print_entity_table, print_summary};
use crate::io::{create_output, ensure_dir, read_records};
use crate::util::convert::copies_display_name;
use crate::util::path::job_file;
use crate::util::text::plural;

const TOTAL_STEPS: u8 = 3;

pub fn run_json(args: JsonArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading sequences");
    let records = read_records(&args.fasta)?;
    let record_count = records.len();
    progress.complete_step(
        "Reading sequences",
        &[format!("Parse FASTA ({})", plural(record_count, "record"))],
    );

    progress.step("Planning combinations");
    let config = build_job_config(&args);
    let plan = plan_jobs(records, &args.stoichiometry, &config)
        .with_context(|| format!("Invalid job request '{}'", args.stoichiometry))?;
    progress.complete_step(
        "Planning combinations",
        &[
            format!("Stoichiometry {}", plan.stoichiometry()),
            format!("Copies: {}", copies_display_name(config.uniform_only)),
            format!("{} to write", plural(plan.job_count(), "job")),
        ],
    );

    if ctx.interactive {
        print_entity_table(plan.source(), plan.stoichiometry());
    }

    progress.step("Writing JSON jobs");
    let written = write_jobs(&plan, &args, &mut progress)?;
    progress.complete_step(
        "Writing JSON jobs",
        &[format!("{} → {}", plural(written, "file"), args.output_dir.display())],
    );

    let summary = format!(
        "Generated {} JSON files in {}",
        written,
        args.output_dir.display()
    );
    if ctx.interactive {
        print_summary(
            "Run Summary",
            &[
                ("Records", record_count.to_string()),
                ("Stoichiometry", plan.stoichiometry().to_string()),
                ("Jobs", written.to_string()),
                ("Output", args.output_dir.display().to_string()),
            ],
        );
        progress.finish(&summary);
    } else {
        eprintln!("{summary}");
    }

    Ok(())
}

fn write_jobs(plan: &JobPlan, args: &JsonArgs, progress: &mut Progress) -> Result<usize> {
    ensure_dir(&args.output_dir)?;

    let total = plan.job_count();
    let mut written = 0;
    for job in plan.jobs() {
        let job = job.context("Failed to build job")?;
        let path = job_file(&args.output_dir, job.name(), Format::Json.extension());

        let mut out = create_output(&path)?;
        write_job_json(&mut out, &job)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        out.flush()
            .with_context(|| format!("Failed to write {}", path.display()))?;

        written += 1;
        progress.update(&format!("Wrote {written}/{total}: {}", job.name()));
    }
    Ok(written)
}
