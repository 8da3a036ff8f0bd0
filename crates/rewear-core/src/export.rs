use crate::models::Item;
use crate::{Error, Result};
use std::path::Path;

/// What a browse result can be written out as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Markdown,
}

impl ExportFormat {
    /// Case-insensitive; "md" and "markdown" both mean Markdown
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "csv" => Some(ExportFormat::Csv),
            "md" | "markdown" => Some(ExportFormat::Markdown),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        Self::from_extension(ext).ok_or_else(|| {
            Error::ConfigError(format!(
                "Unsupported export file {}: expected .json, .csv or .md",
                path.display()
            ))
        })
    }

    pub fn render(self, items: &[Item]) -> Result<String> {
        match self {
            ExportFormat::Json => Exporter::to_json(items),
            ExportFormat::Csv => Ok(Exporter::to_csv(items)),
            ExportFormat::Markdown => Ok(Exporter::to_markdown(items)),
        }
    }
}

/// Dumps a browse result for sharing outside the app
pub struct Exporter;

impl Exporter {
    /// Write `items` to `path` in the format its extension names
    pub fn export_to_file<P: AsRef<Path>>(items: &[Item], path: P) -> Result<()> {
        let path = path.as_ref();
        let format = ExportFormat::from_path(path)?;

        std::fs::write(path, format.render(items)?)?;
        tracing::info!(path = %path.display(), ?format, count = items.len(), "Exported items");
        Ok(())
    }

    pub fn to_json(items: &[Item]) -> Result<String> {
        Ok(serde_json::to_string_pretty(items)?)
    }

    pub fn to_csv(items: &[Item]) -> String {
        let mut output = String::new();

        output.push_str("Id,Title,Category,Size,Condition,Points,Featured,Favorited,Owner\n");

        for item in items {
            output.push_str(&format!(
                "{},{},{},{},{},{},{},{},{}\n",
                item.id,
                Self::escape_csv(&item.title),
                Self::escape_csv(item.category.label()),
                Self::escape_csv(item.size.label()),
                Self::escape_csv(item.condition.label()),
                item.points,
                item.featured,
                item.favorited,
                Self::escape_csv(&item.owner),
            ));
        }

        output
    }

    pub fn to_markdown(items: &[Item]) -> String {
        let mut output = String::new();

        output.push_str("# ReWear Items\n\n");
        output.push_str(&format!("Total items: {}\n\n", items.len()));

        if items.is_empty() {
            return output;
        }

        output.push_str("| # | Title | Category | Size | Condition | Points |\n");
        output.push_str("|---|-------|----------|------|-----------|--------|\n");

        for item in items {
            let star = if item.featured { " ⭐" } else { "" };
            output.push_str(&format!(
                "| {} | {}{} | {} | {} | {} | {} |\n",
                item.id,
                item.title.replace('|', "\\|"),
                star,
                item.category,
                item.size,
                item.condition,
                item.points
            ));
        }

        let total: u64 = items.iter().map(|i| u64::from(i.points)).sum();
        output.push_str("\n## Summary\n\n");
        output.push_str(&format!("- Total points: {}\n", total));
        output.push_str(&format!(
            "- Featured: {}\n",
            items.iter().filter(|i| i.featured).count()
        ));

        output
    }

    /// Escape CSV special characters
    fn escape_csv(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}
