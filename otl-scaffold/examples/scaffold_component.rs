//! Scaffolds a block component into a throwaway engine project.
//!
//! Run with: `RUST_LOG=debug cargo run --example scaffold_component`

use otl_scaffold::prelude::*;

const BLOCK_SCHEMAS: &str = r#"{
    "success": true,
    "data": {
        "schemas": [
            {
                "schema_id": "7f3c",
                "deployment_id": "demo",
                "type": "pricing-card",
                "name": "Pricing Card",
                "fields": [
                    {"id": "title", "type": "text", "label": "Title", "description": "Card heading"},
                    {"id": "price", "type": "number", "label": "Price"},
                    {"id": "accent", "type": "theme-color", "label": "Accent"},
                    {"id": "cta", "type": "group", "label": "Call to action", "fields": [
                        {"id": "label", "type": "localized-text", "label": "Label"},
                        {"id": "link_url", "type": "url", "label": "Link"}
                    ]}
                ],
                "relevancy": 1,
                "is_built_in": false,
                "created_at": "2025-01-01T00:00:00Z",
                "updated_at": "2025-01-01T00:00:00Z"
            }
        ],
        "total": 1
    }
}"#;

const BLOCK_REGISTRY: &str = r#"import { BlockRegistry } from "@otl-core/block-registry";

export const blockRegistry = new BlockRegistry();

/**
 * Custom Blocks
 */
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let engine = tempfile::tempdir()?;
    let layout = EngineLayout::new(engine.path());

    let registry_path = layout.registry_file(ComponentKind::Block);
    if let Some(parent) = registry_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&registry_path, BLOCK_REGISTRY)?;

    let schemas = parse_block_schemas(BLOCK_SCHEMAS)?;
    let schema = find_block_schema(&schemas, "pricing-card")
        .ok_or_else(|| SchemaError::not_found("block", "pricing-card"))?;

    let generator = Generator::default();
    let file = generator.generate_for_schema(ComponentKind::Block, schema);
    let written = file.write_under(layout.root())?;
    println!("--- {} ---\n{}", written.display(), file.content);

    let entry = generator.registry_entry(ComponentKind::Block, schema.schema_type());
    for _ in 0..2 {
        let outcome = update_registry_file(&registry_path, &entry)?;
        println!("Registry update: {:?}", outcome);
    }

    println!(
        "--- {} ---\n{}",
        registry_path.display(),
        std::fs::read_to_string(&registry_path)?
    );
    Ok(())
}
