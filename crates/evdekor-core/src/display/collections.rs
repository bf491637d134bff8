//! Catalog listing.

use std::fmt;

use crate::catalog::{DISTRICTS, EXPECTATIONS, SCHEDULE_SLOTS, SERVICES};

/// All selectable values with their labels, grouped by field.
///
/// The value column is what `set <field> <value>` expects.
pub struct CatalogListing;

impl fmt::Display for CatalogListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Hizmetler (`service`)")?;
        writeln!(f)?;
        for service in &SERVICES {
            writeln!(
                f,
                "- `{}` **{}**: {}",
                service.value, service.title, service.description
            )?;
        }

        writeln!(f)?;
        writeln!(f, "## Bölgeler (`district`)")?;
        writeln!(f)?;
        for district in &DISTRICTS {
            writeln!(f, "- `{}` {}", district.value, district.label)?;
        }

        writeln!(f)?;
        writeln!(f, "## Zaman dilimleri (`scheduleSlot`)")?;
        writeln!(f)?;
        for slot in &SCHEDULE_SLOTS {
            writeln!(f, "- `{}` {}", slot.value, slot.label)?;
        }

        writeln!(f)?;
        writeln!(f, "## Beklentiler (`expectations`, virgülle ayrılmış)")?;
        writeln!(f)?;
        for choice in &EXPECTATIONS {
            writeln!(f, "- `{}` {}", choice.value, choice.label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_every_group() {
        let output = CatalogListing.to_string();

        assert!(output.contains("- `ozel-mobilya` **Özel Üretim Mobilya**"));
        assert!(output.contains("- `other` Diğer"));
        assert!(output.contains("- `haftaici-aksam`"));
        assert!(output.contains("- `trust` Güvenilir ekip"));
    }
}
