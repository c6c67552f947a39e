use std::env;
use std::fs;
use webform_convert::prelude::*;

fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: cargo run -- <path/to/export.json> [path/to/output.yaml]");
        std::process::exit(1);
    }

    let export_path = &args[1];
    let output_path = args
        .get(2)
        .map(String::as_str)
        .unwrap_or("drupal-webform.yaml");

    println!("Loading form export from: {}", export_path);
    let export = match FormExport::from_file(export_path) {
        Ok(export) => export,
        Err(e) => {
            eprintln!("Failed to load form export '{}': {}", export_path, e);
            std::process::exit(1);
        }
    };

    if let Some(title) = export.title() {
        println!("Converting form: {}", title);
    }
    let input_count = export
        .fields()
        .iter()
        .filter(|field| !field.kind.is_structural())
        .count();
    println!(
        "{} field(s) found ({} inputs).",
        export.fields().len(),
        input_count
    );

    // Conversion phase. Only wrap the sequence in a synthetic page when
    // fields appear before any explicit page declaration.
    let converter = Converter::builder()
        .start_with_page(needs_leading_page(export.fields()))
        .build();
    let conversion = converter.convert(export.fields());

    println!(
        "Converted {} top-level element(s).",
        conversion.elements.child_count()
    );
    if !conversion.report.is_clean() {
        eprintln!("Warning: {}", conversion.report);
    }

    // Render and write the YAML document
    let yaml = match render_yaml(&conversion.elements) {
        Ok(yaml) => yaml,
        Err(e) => {
            eprintln!("Failed to render webform YAML: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = fs::write(output_path, yaml) {
        eprintln!("Failed to write '{}': {}", output_path, e);
        std::process::exit(1);
    }

    println!(
        "Conversion completed. Drupal Webform YAML file created at '{}'.",
        output_path
    );
}
