use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use stoich_forge::MultisetPlan;
use stoich_forge::io::{Format, JobTable, template_names, write_job_fasta};

use crate::cli::MultisetArgs;
use crate::config::build_multiset_config;
use crate::display::{Context as DisplayContext, Progress, print_record_table, print_summary};
use crate::io::{create_output, ensure_dir, read_records};
use crate::util::path::{job_file, tsv_name};
use crate::util::text::{plural, preview};

const TOTAL_STEPS: u8 = 3;

pub fn run_multisets(args: MultisetArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading inputs");
    let records = read_records(&args.fasta)?;
    let templates = template_names(&args.templates_dir).with_context(|| {
        format!(
            "Failed to list templates in {}",
            args.templates_dir.display()
        )
    })?;
    progress.complete_step(
        "Reading inputs",
        &[
            format!("Parse FASTA ({})", plural(records.len(), "record")),
            format!(
                "{}: {}",
                plural(templates.len(), "template"),
                preview(&templates, 4)
            ),
        ],
    );

    progress.step("Enumerating multisets");
    let config = build_multiset_config(&args);
    let plan = MultisetPlan::new(records, templates, &config)
        .context("Failed to enumerate sequence multisets")?;
    progress.complete_step(
        "Enumerating multisets",
        &[
            format!("Sizes {}..={}", config.min_size, config.max_size),
            plural(plan.signatures().len(), "unique multiset"),
        ],
    );

    if ctx.interactive {
        print_record_table(plan.source());
    }

    progress.step("Writing FASTA and TSV jobs");
    let mut substeps = Vec::with_capacity(plan.templates().len());
    for template in plan.templates() {
        let (jobs, table) = write_template(&plan, template, &args, &mut progress)?;
        substeps.push(format!(
            "{template}: {} → {}",
            plural(jobs, "job"),
            table.display()
        ));
    }
    progress.complete_step("Writing FASTA and TSV jobs", &substeps);

    let summary = format!(
        "Generated {} across {}",
        plural(plan.job_count(), "job"),
        plural(plan.templates().len(), "template")
    );
    if ctx.interactive {
        print_summary(
            "Run Summary",
            &[
                ("Records", plan.source().len().to_string()),
                ("Multisets", plan.signatures().len().to_string()),
                ("Templates", plan.templates().len().to_string()),
                ("Jobs", plan.job_count().to_string()),
                ("Output", args.output_dir.display().to_string()),
            ],
        );
        progress.finish(&summary);
    } else {
        eprintln!("{summary}");
    }

    Ok(())
}

/// Writes the FASTA jobs and the TSV table of one template; returns the job
/// count and the table path.
fn write_template(
    plan: &MultisetPlan,
    template: &str,
    args: &MultisetArgs,
    progress: &mut Progress,
) -> Result<(usize, PathBuf)> {
    let dir = args.output_dir.join(template);
    ensure_dir(&dir)?;

    let table_path = dir.join(tsv_name(&args.output, template));
    let mut table =
        JobTable::new(create_output(&table_path)?).with_context(|| write_failed(&table_path))?;

    let total = plan.signatures().len();
    let mut written = 0;
    for job in plan.jobs_for_template(template) {
        let job = job.context("Failed to build job")?;
        let path = job_file(&dir, job.name(), Format::Fasta.extension());

        let mut out = create_output(&path)?;
        write_job_fasta(&mut out, &job).with_context(|| write_failed(&path))?;
        out.flush().with_context(|| write_failed(&path))?;

        table
            .write_job(&job)
            .with_context(|| write_failed(&table_path))?;

        written += 1;
        progress.update(&format!("{template}: {written}/{total}"));
    }

    table.finish().with_context(|| write_failed(&table_path))?;
    Ok((written, table_path))
}

fn write_failed(path: &Path) -> String {
    format!("Failed to write {}", path.display())
}
