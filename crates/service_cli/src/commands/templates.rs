//! Templates command implementation
//!
//! Lists the built-in product templates, or exports one as JSON.

use product_core::ProductTemplate;

use crate::{CliError, Result};

/// Run the templates command
pub fn run(export: Option<&str>) -> Result<()> {
    if let Some(id) = export {
        let template = ProductTemplate::from_id(id).ok_or_else(|| {
            CliError::InvalidArgument(format!(
                "unknown template: {}. Supported: {}",
                id,
                known_ids()
            ))
        })?;
        let graph = template.build()?;
        println!("{}", serde_json::to_string_pretty(&graph)?);
        return Ok(());
    }

    println!("{:<22} {:<18} DESCRIPTION", "ID", "NAME");
    for template in ProductTemplate::ALL {
        println!(
            "{:<22} {:<18} {}",
            template.id(),
            template.name(),
            template.description()
        );
    }
    Ok(())
}

fn known_ids() -> String {
    ProductTemplate::ALL
        .iter()
        .map(|t| t.id())
        .collect::<Vec<_>>()
        .join(", ")
}
