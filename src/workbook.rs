//! Load the printed timetable workbook into a plain grid of cell strings.
//! All spreadsheet I/O lives here; the grid walker never touches files.

use std::fs;
use std::path::{Path, PathBuf};

use calamine::{Data, Reader};

/// Render one cell the way the parser wants it: plain text, empty for blanks.
fn cell_str(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => format!("{f}"),
        Data::Int(i) => format!("{i}"),
        Data::Bool(b) => format!("{b}"),
        other => format!("{other:?}"),
    }
}

/// Read the first worksheet into rows of strings. Multi-line cell text is
/// preserved; line breaks are significant to the cell decoder.
pub fn load_grid(path: impl AsRef<Path>) -> Result<Vec<Vec<String>>, Box<dyn std::error::Error>> {
    let path = path.as_ref();
    let mut workbook = calamine::open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| format!("{} has no worksheets", path.display()))?;
    let range = workbook.worksheet_range(&sheet_name)?;
    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_str).collect())
        .collect())
}

/// First `.xls`/`.xlsx` in `dir`, if any. The exported workbook usually sits
/// next to the binary after download, so the CLI falls back to this scan when
/// no path is given.
pub fn find_workbook(dir: impl AsRef<Path>) -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            matches!(
                path.extension().and_then(|ext| ext.to_str()),
                Some("xls") | Some("xlsx")
            )
        })
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_str_coerces_common_cell_types() {
        assert_eq!(cell_str(&Data::Empty), "");
        assert_eq!(cell_str(&Data::String("第一大节".to_string())), "第一大节");
        assert_eq!(cell_str(&Data::Float(8.0)), "8");
        assert_eq!(cell_str(&Data::Int(3)), "3");
        assert_eq!(cell_str(&Data::Bool(true)), "true");
    }

    #[test]
    fn find_workbook_ignores_other_files() {
        let dir = std::env::temp_dir().join(format!(
            "sdust-ical-scan-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("notes.txt"), "x").unwrap();
        assert_eq!(find_workbook(&dir), None);

        fs::write(dir.join("课表.xls"), "x").unwrap();
        assert_eq!(find_workbook(&dir), Some(dir.join("课表.xls")));

        let _ = fs::remove_dir_all(&dir);
    }
}
