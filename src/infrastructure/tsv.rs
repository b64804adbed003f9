// Tab-separated summary payloads -> typed usage rows
use chrono::NaiveDate;

use crate::domain::usage::{AssetUsage, DailyUsage, RegionUsage};
use crate::error::PipelineError;

// File suffixes the upstream summarizer emits per-asset rows for.
const ASSET_EXTENSIONS: [&str; 3] = ["nwb", "mp4", "avi"];

/// Parse a per-day summary: header line, then `date <tab> bytes` rows.
pub fn parse_daily_rows(text: &str) -> Result<Vec<DailyUsage>, PipelineError> {
    data_lines(text)?
        .into_iter()
        .map(|(line_number, line)| {
            let columns = split_columns(line, line_number)?;
            Ok(DailyUsage::new(
                parse_date(columns[0], line_number)?,
                parse_bytes(columns[1], line_number)?,
            ))
        })
        .collect()
}

/// Parse a per-asset summary: header line, then `path <tab> bytes` rows.
/// Paths are reduced to their basename; a suffix outside the known set
/// fails the whole payload.
pub fn parse_asset_rows(text: &str) -> Result<Vec<AssetUsage>, PipelineError> {
    data_lines(text)?
        .into_iter()
        .map(|(line_number, line)| {
            let columns = split_columns(line, line_number)?;
            Ok(AssetUsage::new(
                asset_basename(columns[0])?,
                parse_bytes(columns[1], line_number)?,
            ))
        })
        .collect()
}

/// Parse a per-region summary: header line, then `region <tab> bytes` rows.
pub fn parse_region_rows(text: &str) -> Result<Vec<RegionUsage>, PipelineError> {
    data_lines(text)?
        .into_iter()
        .map(|(line_number, line)| {
            let columns = split_columns(line, line_number)?;
            Ok(RegionUsage::new(
                columns[0].trim().to_string(),
                parse_bytes(columns[1], line_number)?,
            ))
        })
        .collect()
}

/// Non-blank data lines with their 1-based line numbers. The first
/// non-blank line is the header and is skipped; a payload without at
/// least one data row after it is `InsufficientData`.
fn data_lines(text: &str) -> Result<Vec<(usize, &str)>, PipelineError> {
    let mut lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(PipelineError::InsufficientData);
    }

    lines.remove(0);
    Ok(lines)
}

fn split_columns(line: &str, line_number: usize) -> Result<Vec<&str>, PipelineError> {
    let columns: Vec<&str> = line.split('\t').collect();
    // Columns past the second are ignored so the upstream may grow the schema.
    if columns.len() < 2 {
        return Err(PipelineError::MalformedRow {
            line: line_number,
            reason: format!("expected 2 tab-separated columns, found {}", columns.len()),
        });
    }
    Ok(columns)
}

fn parse_bytes(field: &str, line_number: usize) -> Result<u64, PipelineError> {
    field
        .trim()
        .parse()
        .map_err(|_| PipelineError::MalformedRow {
            line: line_number,
            reason: format!("byte count {:?} is not a non-negative integer", field.trim()),
        })
}

fn parse_date(field: &str, line_number: usize) -> Result<NaiveDate, PipelineError> {
    NaiveDate::parse_from_str(field.trim(), "%Y-%m-%d").map_err(|_| {
        PipelineError::MalformedRow {
            line: line_number,
            reason: format!("date {:?} is not in YYYY-MM-DD form", field.trim()),
        }
    })
}

fn asset_basename(path: &str) -> Result<String, PipelineError> {
    let path = path.trim();
    let basename = path.rsplit('/').next().unwrap_or(path);
    // A name without a period has no suffix to check; treat the whole
    // name as the suffix, like the upstream summarizer does.
    let extension = match basename.rsplit_once('.') {
        Some((_, extension)) => extension,
        None => basename,
    };

    if !ASSET_EXTENSIONS.contains(&extension) {
        return Err(PipelineError::UnsupportedAssetType {
            extension: extension.to_string(),
        });
    }

    Ok(basename.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_rows_parse_in_order() {
        let text = "date\tbytes_sent\n2024-01-01\t1000\n2024-01-03\t2000\n";
        let rows = parse_daily_rows(text).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date.to_string(), "2024-01-01");
        assert_eq!(rows[0].bytes_sent, 1000);
        assert_eq!(rows[1].bytes_sent, 2000);
    }

    #[test]
    fn test_header_only_payload_is_insufficient() {
        let error = parse_daily_rows("date\tbytes_sent\n").unwrap_err();
        assert!(matches!(error, PipelineError::InsufficientData));

        let error = parse_daily_rows("").unwrap_err();
        assert!(matches!(error, PipelineError::InsufficientData));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let text = "date\tbytes_sent\n\n2024-01-01\t1000\n\n\n2024-01-02\t500\n";
        let rows = parse_daily_rows(text).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_crlf_payload_parses() {
        let text = "date\tbytes_sent\r\n2024-01-01\t1000\r\n";
        let rows = parse_daily_rows(text).unwrap();
        assert_eq!(rows[0].bytes_sent, 1000);
    }

    #[test]
    fn test_non_numeric_bytes_is_malformed_with_line_number() {
        let text = "date\tbytes_sent\n2024-01-01\t1000\n2024-01-02\tlots\n";
        let error = parse_daily_rows(text).unwrap_err();
        let PipelineError::MalformedRow { line, reason } = error else {
            panic!("expected a malformed-row failure");
        };
        assert_eq!(line, 3);
        assert!(reason.contains("lots"));
    }

    #[test]
    fn test_bad_date_is_malformed() {
        let text = "date\tbytes_sent\nJan 1 2024\t1000\n";
        let error = parse_daily_rows(text).unwrap_err();
        assert!(matches!(error, PipelineError::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn test_short_row_is_malformed() {
        let text = "date\tbytes_sent\n2024-01-01\n";
        let error = parse_daily_rows(text).unwrap_err();
        assert!(matches!(error, PipelineError::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let text = "date\tbytes_sent\textra\n2024-01-01\t1000\tanything\n";
        let rows = parse_daily_rows(text).unwrap();
        assert_eq!(rows[0].bytes_sent, 1000);
    }

    #[test]
    fn test_asset_rows_reduce_paths_to_basenames() {
        let text = "asset\tbytes_sent\nsub-01/ses-01/sub-01_behavior.nwb\t4096\nclip.mp4\t100\n";
        let rows = parse_asset_rows(text).unwrap();

        assert_eq!(rows[0].asset_name, "sub-01_behavior.nwb");
        assert_eq!(rows[0].bytes_sent, 4096);
        assert_eq!(rows[1].asset_name, "clip.mp4");
    }

    #[test]
    fn test_txt_asset_is_unsupported() {
        let text = "asset\tbytes_sent\nnotes.txt\t10\n";
        let error = parse_asset_rows(text).unwrap_err();
        let PipelineError::UnsupportedAssetType { extension } = error else {
            panic!("expected an unsupported-asset failure");
        };
        assert_eq!(extension, "txt");
    }

    #[test]
    fn test_suffixless_asset_is_unsupported() {
        let text = "asset\tbytes_sent\nREADME\t10\n";
        let error = parse_asset_rows(text).unwrap_err();
        assert!(matches!(error, PipelineError::UnsupportedAssetType { .. }));
    }

    #[test]
    fn test_region_rows_parse() {
        let text = "region\tbytes_sent\nUS/California\t4000\nDE/Unknown\t20\n";
        let rows = parse_region_rows(text).unwrap();

        assert_eq!(rows[0].region_code, "US/California");
        assert_eq!(rows[0].bytes_sent, 4000);
        assert_eq!(rows[1].region_code, "DE/Unknown");
    }
}
