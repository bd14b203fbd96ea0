//! `apdsgen generate` command.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::archive;
use crate::cli::GenerateArgs;
use crate::context::ServiceContext;
use crate::generate::batch::{BatchOptions, Record};
use crate::session::Session;

/// Execute the `generate` command.
///
/// Parses the template, generates the batch, writes one JSON file per
/// record plus a ZIP archive and an `index.json` summary manifest into the
/// output directory, and prints the index table.
///
/// # Errors
///
/// Returns an error string when the template is invalid, generation is
/// refused, or an artifact cannot be written.
pub fn run(ctx: &ServiceContext, args: &GenerateArgs) -> Result<(), String> {
    let text = read_template(&args.template)?;

    let mut session = Session::new();
    session.load_template(&text)?;
    let options = BatchOptions {
        count: args.count,
        request_id_prefix: args.prefix.clone(),
        email_domain: args.domain.clone(),
    };
    session.generate(&options, ctx.clock.as_ref(), ctx.rng.as_ref())?;

    let payload_dir = args.out.join("payloads");
    fs::create_dir_all(&payload_dir)
        .map_err(|e| format!("Failed to create {}: {e}", payload_dir.display()))?;
    for record in session.records() {
        let path = payload_dir.join(&record.filename);
        fs::write(&path, archive::render_record(record)?)
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
    }

    let archive_path = args.out.join(archive::archive_name(session.records().len()));
    fs::write(&archive_path, archive::zip_records(session.records())?)
        .map_err(|e| format!("Failed to write {}: {e}", archive_path.display()))?;

    let summaries: Vec<_> = session.records().iter().map(|r| &r.summary).collect();
    let index_text = serde_json::to_string_pretty(&summaries)
        .map_err(|e| format!("Failed to serialize index: {e}"))?;
    let index_path = args.out.join("index.json");
    fs::write(&index_path, index_text + "\n")
        .map_err(|e| format!("Failed to write {}: {e}", index_path.display()))?;

    if session.exhausted_claims() > 0 {
        eprintln!(
            "Warning: {} uniqueness claim(s) ran out of attempts; duplicate values are possible.",
            session.exhausted_claims()
        );
    }

    print_index(session.records());
    println!(
        "\nGenerated {} payloads in {} (archive: {})",
        session.records().len(),
        payload_dir.display(),
        archive_path.display()
    );
    if let Some(first) = session.records().first() {
        println!("Preview the first payload with: cat {}", payload_dir.join(&first.filename).display());
    }
    Ok(())
}

fn read_template(path: &Path) -> Result<String, String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| format!("Failed to read template from stdin: {e}"))?;
        Ok(text)
    } else {
        fs::read_to_string(path)
            .map_err(|e| format!("Failed to read template {}: {e}", path.display()))
    }
}

fn print_index(records: &[Record]) {
    println!(
        "{:<5} {:<27} {:<30} {:<36} {:<19} {:<12} {:<12}",
        "#", "requestId", "Name", "Email", "EDIPI", "NPI", "secId"
    );
    for (i, record) in records.iter().enumerate() {
        let summary = &record.summary;
        let name =
            format!("{}, {} {}", summary.sur_name, summary.given_name, summary.middle_name);
        println!(
            "{:<5} {:<27} {:<30} {:<36} {:<19} {:<12} {:<12}",
            i + 1,
            summary.request_id,
            name,
            summary.email,
            summary.edipi,
            summary.npi,
            summary.sec_id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const TEMPLATE: &str =
        r#"{"apdsRequest":{"messageMetaData":{"requestId":"X"},"identityAttributes":{"EDIPI":"Y"}}}"#;

    fn args(template: PathBuf, out: PathBuf, count: usize) -> GenerateArgs {
        GenerateArgs {
            template,
            count,
            prefix: "BLLTEST".to_string(),
            domain: "VA.TEST.COM".to_string(),
            out,
        }
    }

    #[test]
    fn writes_payloads_archive_and_index() {
        let dir = std::env::temp_dir().join("apdsgen_cmd_generate_artifacts");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let template_path = dir.join("template.json");
        fs::write(&template_path, TEMPLATE).unwrap();
        let out = dir.join("out");

        let ctx = ServiceContext::live();
        run(&ctx, &args(template_path, out.clone(), 3)).unwrap();

        let payloads: Vec<_> = fs::read_dir(out.join("payloads")).unwrap().collect();
        assert_eq!(payloads.len(), 3);
        assert!(out.join("apds_payloads_3.zip").exists());
        assert!(out.join("index.json").exists());

        let index: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join("index.json")).unwrap()).unwrap();
        assert_eq!(index.as_array().unwrap().len(), 3);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn rejects_an_invalid_template() {
        let dir = std::env::temp_dir().join("apdsgen_cmd_generate_invalid");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let template_path = dir.join("template.json");
        fs::write(&template_path, "{ not json").unwrap();

        let ctx = ServiceContext::live();
        let err = run(&ctx, &args(template_path, dir.join("out"), 1)).unwrap_err();
        assert!(err.contains("Template JSON is invalid"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn rejects_a_structural_mismatch() {
        let dir = std::env::temp_dir().join("apdsgen_cmd_generate_mismatch");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let template_path = dir.join("template.json");
        fs::write(&template_path, r#"{"other": true}"#).unwrap();

        let ctx = ServiceContext::live();
        let err = run(&ctx, &args(template_path, dir.join("out"), 1)).unwrap_err();
        assert!(err.contains("expected structure"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_template_file_is_reported() {
        let ctx = ServiceContext::live();
        let err = run(
            &ctx,
            &args(PathBuf::from("/nonexistent/t.json"), std::env::temp_dir().join("x"), 1),
        )
        .unwrap_err();
        assert!(err.contains("Failed to read template"));
    }
}
