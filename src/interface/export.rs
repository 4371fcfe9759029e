use std::path::Path;

use crate::error::Result;
use crate::models::EstimateRow;

/// Write per-food estimates to a CSV file, one row per food.
pub fn write_csv(rows: &[EstimateRow], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_csv() {
        let rows = vec![EstimateRow {
            food_name: "Bread".to_string(),
            hunger: 5,
            saturation_increment: 6.0,
            food_level: 20,
            saturation_level: 11.0,
            health_increment: 9.5,
            projected_health: 20.0,
            rotten: false,
        }];

        let file = NamedTempFile::new().unwrap();
        write_csv(&rows, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some(
                "food_name,hunger,saturation_increment,food_level,saturation_level,health_increment,projected_health,rotten"
            )
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("Bread,5,"));
        assert!(row.ends_with(",false"));
    }
}
