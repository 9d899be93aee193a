use std::path::{Path, PathBuf};

/// `{dir}/{job}.{ext}` for one job output file.
pub fn job_file(dir: &Path, job_name: &str, extension: &str) -> PathBuf {
    dir.join(format!("{job_name}.{extension}"))
}

/// File name of the per-template TSV table: `{stem}_{template}.tsv`.
pub fn tsv_name(output: &Path, template: &str) -> String {
    let stem = output.file_stem().unwrap_or_default();
    format!("{}_{}.tsv", stem.to_string_lossy(), template)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_file_joins_name_and_extension() {
        assert_eq!(
            job_file(Path::new("out/t1"), "2A_1B_t1", "fasta"),
            PathBuf::from("out/t1/2A_1B_t1.fasta")
        );
    }

    #[test]
    fn tsv_name_uses_stem_only() {
        assert_eq!(
            tsv_name(Path::new("some/dir/unique_combinations.tsv"), "no_template"),
            "unique_combinations_no_template.tsv"
        );
        assert_eq!(tsv_name(Path::new("table"), "t"), "table_t.tsv");
    }
}
