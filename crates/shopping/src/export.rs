use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

use crate::{ShoppingItem, ShoppingList};

#[derive(
    EnumString, Display, AsRefStr, Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Text,
    Csv,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Text => "text/plain; charset=utf-8",
            ExportFormat::Csv => "text/csv; charset=utf-8",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
            ExportFormat::Csv => "csv",
        }
    }
}

impl ShoppingList {
    /// Render the list for download.
    pub fn export(&self, format: ExportFormat) -> anyhow::Result<String> {
        Ok(match format {
            ExportFormat::Json => serde_json::to_string_pretty(self)?,
            ExportFormat::Text => self.to_text(),
            ExportFormat::Csv => self.to_csv(),
        })
    }

    /// One `## SECTION` block per category, `ITEMS` when the list is not grouped.
    fn to_text(&self) -> String {
        let mut out = format!("# {}\n", self.name);
        let mut section = None;

        for item in &self.items {
            let heading = section_name(item);
            if section.as_deref() != Some(heading.as_str()) {
                out.push_str(&format!("\n## {}\n", heading.to_uppercase()));
                section = Some(heading);
            }

            let mark = if item.checked { "x" } else { " " };
            out.push_str(&format!("- [{mark}] {}", item.name));

            match (item.display_quantity.as_deref(), item.unit.as_deref()) {
                (Some(quantity), Some(unit)) => out.push_str(&format!(" ({quantity} {unit})")),
                (Some(quantity), None) => out.push_str(&format!(" ({quantity})")),
                _ => {}
            }

            if !item.substitutions.is_empty() {
                out.push_str(&format!(" [subs: {}]", item.substitutions.join(", ")));
            }

            out.push('\n');
        }

        out
    }

    fn to_csv(&self) -> String {
        let mut out = String::from("Category,Ingredient,Quantity,Unit,Substitutions,Checked\n");

        for item in &self.items {
            let row = [
                item.category.map(|c| c.to_string()).unwrap_or_default(),
                item.name.to_owned(),
                item.display_quantity.to_owned().unwrap_or_default(),
                item.unit.to_owned().unwrap_or_default(),
                item.substitutions.join(", "),
                item.checked.to_string(),
            ];

            let row = row.iter().map(|field| csv_field(field)).collect::<Vec<_>>();
            out.push_str(&row.join(","));
            out.push('\n');
        }

        out
    }
}

fn section_name(item: &ShoppingItem) -> String {
    item.category
        .map(|c| c.to_string())
        .unwrap_or_else(|| "items".to_owned())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}
