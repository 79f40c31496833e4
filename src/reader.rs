//! Reader Module
//!
//! calamineを使用した入力ワークブックの読み込みと列抽出を提供する
//! モジュール。

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader, Sheets, Xlsx};
use std::io::{Cursor, Read, Seek};

use crate::api::{ColumnSelector, SheetSelector};
use crate::error::ChartZeroError;
use crate::security::SecurityConfig;

/// 入力ワークブックから抽出された1列分のデータ
#[derive(Debug, Clone)]
pub(crate) struct ExtractedColumn {
    /// 列タイトル（ヘッダーセルの文字列、またはA1形式の列名）
    pub title: String,

    /// 列の値（空セルは含まれない）
    pub values: Vec<Data>,
}

/// 列リーダー
///
/// calamineのラッパーとして、シート選択と列抽出を提供します。
pub(crate) struct ColumnReader {
    /// calamineのワークブック（XLSX形式のみサポート）
    workbook: Xlsx<Cursor<Vec<u8>>>,

    /// セキュリティ設定
    security_config: SecurityConfig,
}

impl ColumnReader {
    /// ワークブックを開く
    ///
    /// # 引数
    ///
    /// * `reader` - Excelファイルを読み込むためのリーダー（Read + Seekトレイトを実装）
    ///
    /// # 戻り値
    ///
    /// * `Ok(ColumnReader)` - ワークブックの読み込みに成功した場合（XLSX形式のみサポート）
    /// * `Err(ChartZeroError)` - エラーが発生した場合
    pub fn open<R: Read + Seek>(mut reader: R) -> Result<Self, ChartZeroError> {
        let security_config = SecurityConfig::default();

        // セキュリティチェック: 入力ファイルサイズの上限
        let mut buffer = Vec::new();
        let bytes_read = reader.read_to_end(&mut buffer)?;

        if bytes_read as u64 > security_config.max_input_file_size {
            return Err(ChartZeroError::SecurityViolation(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                bytes_read, security_config.max_input_file_size
            )));
        }

        // calamineでワークブックを開く
        let sheets = open_workbook_auto_from_rs(Cursor::new(buffer)).map_err(ChartZeroError::Parse)?;
        let workbook = match sheets {
            Sheets::Xlsx(workbook) => workbook,
            _ => {
                return Err(ChartZeroError::Config(
                    "Only XLSX format is supported".to_string(),
                ))
            }
        };

        Ok(Self {
            workbook,
            security_config,
        })
    }

    /// すべてのシート名を取得
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// シート選択方式に基づいてシートを選択
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - 選択されたシート名
    /// * `Err(ChartZeroError::Config)` - シートが見つからない、またはインデックスが範囲外の場合
    pub fn select_sheet(&self, selector: &SheetSelector) -> Result<String, ChartZeroError> {
        let all_sheet_names = self.sheet_names();

        match selector {
            SheetSelector::First => all_sheet_names
                .first()
                .cloned()
                .ok_or_else(|| ChartZeroError::Config("Workbook has no sheets".to_string())),

            SheetSelector::Index(index) => {
                if *index >= all_sheet_names.len() {
                    return Err(ChartZeroError::Config(format!(
                        "Sheet index {} is out of range (total: {})",
                        index,
                        all_sheet_names.len()
                    )));
                }
                Ok(all_sheet_names[*index].clone())
            }

            SheetSelector::Name(name) => {
                if !all_sheet_names.contains(name) {
                    return Err(ChartZeroError::Config(format!("Sheet '{}' not found", name)));
                }
                Ok(name.clone())
            }
        }
    }

    /// シートのセル範囲を読み込む
    ///
    /// # 引数
    ///
    /// * `sheet_name` - 読み込むシート名
    pub fn read_range(&mut self, sheet_name: &str) -> Result<Range<Data>, ChartZeroError> {
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(|e| ChartZeroError::Parse(e.into()))?;

        // セキュリティチェック: セル数の上限
        let (rows, cols) = range.get_size();
        let cell_count = rows as u64 * cols as u64;
        if cell_count > self.security_config.max_cell_count {
            return Err(ChartZeroError::SecurityViolation(format!(
                "Sheet '{}' exceeds maximum cell count: {} cells (max: {})",
                sheet_name, cell_count, self.security_config.max_cell_count
            )));
        }

        Ok(range)
    }

    /// セル範囲から1列分のデータを抽出する
    ///
    /// 空セルは「観測値なし」として抽出結果に含まれません。
    ///
    /// # 引数
    ///
    /// * `range` - 抽出元のセル範囲
    /// * `selector` - 列選択方式
    /// * `has_header` - 1行目をヘッダー行として扱うかどうか
    ///
    /// # 戻り値
    ///
    /// * `Ok(ExtractedColumn)` - 列タイトルと値のペア
    /// * `Err(ChartZeroError::Config)` - 列が見つからない場合
    pub fn extract_column(
        range: &Range<Data>,
        selector: &ColumnSelector,
        has_header: bool,
    ) -> Result<ExtractedColumn, ChartZeroError> {
        let (_, width) = range.get_size();

        // 1. 列インデックスの解決
        let col_index = match selector {
            ColumnSelector::Index(index) => {
                if *index as usize >= width {
                    return Err(ChartZeroError::Config(format!(
                        "Column index {} is out of range (width: {})",
                        index, width
                    )));
                }
                *index as usize
            }

            ColumnSelector::Header(name) => {
                let header_row = range.rows().next().ok_or_else(|| {
                    ChartZeroError::Config(format!(
                        "Column '{}' not found: sheet has no header row",
                        name
                    ))
                })?;
                header_row
                    .iter()
                    .position(|cell| matches!(cell, Data::String(s) if s == name))
                    .ok_or_else(|| {
                        ChartZeroError::Config(format!("Column '{}' not found in header row", name))
                    })?
            }
        };

        // 2. 列タイトルの解決
        // ヘッダー行があればヘッダーセルの文字列、なければA1形式の列名
        let title = if has_header {
            match range.rows().next().and_then(|row| row.get(col_index)) {
                Some(Data::Empty) | None => col_index_to_letter(col_index as u32),
                Some(cell) => cell.to_string(),
            }
        } else {
            col_index_to_letter(col_index as u32)
        };

        // 3. 値の抽出（ヘッダー行をスキップし、空セルを除外）
        let skip_rows = usize::from(has_header);
        let values = range
            .rows()
            .skip(skip_rows)
            .filter_map(|row| row.get(col_index))
            .filter(|cell| !matches!(cell, Data::Empty))
            .cloned()
            .collect();

        Ok(ExtractedColumn { title, values })
    }
}

/// 列インデックスを文字列に変換（0 -> "A", 25 -> "Z", 26 -> "AA"）
fn col_index_to_letter(mut col: u32) -> String {
    let mut result = String::new();
    loop {
        let remainder = col % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_col_index_to_letter() {
        assert_eq!(col_index_to_letter(0), "A");
        assert_eq!(col_index_to_letter(1), "B");
        assert_eq!(col_index_to_letter(25), "Z");
        assert_eq!(col_index_to_letter(26), "AA");
        assert_eq!(col_index_to_letter(27), "AB");
        assert_eq!(col_index_to_letter(51), "AZ");
        assert_eq!(col_index_to_letter(52), "BA");
    }

    #[test]
    fn test_extract_column_by_index() {
        let mut range = Range::new((0, 0), (3, 1));
        range.set_value((0, 0), Data::String("A列".to_string()));
        range.set_value((0, 1), Data::String("B列".to_string()));
        range.set_value((1, 0), Data::String("c".to_string()));
        range.set_value((1, 1), Data::Int(2));
        range.set_value((2, 0), Data::Int(4));
        range.set_value((2, 1), Data::Int(5));
        range.set_value((3, 0), Data::String("c".to_string()));
        range.set_value((3, 1), Data::Int(5));

        let column =
            ColumnReader::extract_column(&range, &ColumnSelector::Index(0), true).unwrap();
        assert_eq!(column.title, "A列");
        assert_eq!(column.values.len(), 3);
        assert_eq!(column.values[0], Data::String("c".to_string()));
        assert_eq!(column.values[1], Data::Int(4));
    }

    #[test]
    fn test_extract_column_by_header() {
        let mut range = Range::new((0, 0), (2, 1));
        range.set_value((0, 0), Data::String("Name".to_string()));
        range.set_value((0, 1), Data::String("Score".to_string()));
        range.set_value((1, 0), Data::String("alice".to_string()));
        range.set_value((1, 1), Data::Int(10));
        range.set_value((2, 0), Data::String("bob".to_string()));
        range.set_value((2, 1), Data::Int(20));

        let column = ColumnReader::extract_column(
            &range,
            &ColumnSelector::Header("Score".to_string()),
            true,
        )
        .unwrap();
        assert_eq!(column.title, "Score");
        assert_eq!(column.values, vec![Data::Int(10), Data::Int(20)]);
    }

    #[test]
    fn test_extract_column_header_not_found() {
        let mut range = Range::new((0, 0), (1, 0));
        range.set_value((0, 0), Data::String("Name".to_string()));
        range.set_value((1, 0), Data::String("alice".to_string()));

        let result = ColumnReader::extract_column(
            &range,
            &ColumnSelector::Header("Missing".to_string()),
            true,
        );

        match result {
            Err(ChartZeroError::Config(msg)) => {
                assert!(msg.contains("'Missing' not found"));
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_extract_column_index_out_of_range() {
        let mut range = Range::new((0, 0), (1, 0));
        range.set_value((0, 0), Data::String("Name".to_string()));
        range.set_value((1, 0), Data::String("alice".to_string()));

        let result = ColumnReader::extract_column(&range, &ColumnSelector::Index(5), true);
        match result {
            Err(ChartZeroError::Config(msg)) => {
                assert!(msg.contains("out of range"));
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_extract_column_skips_empty_cells() {
        let mut range = Range::new((0, 0), (4, 0));
        range.set_value((0, 0), Data::String("Answers".to_string()));
        range.set_value((1, 0), Data::String("yes".to_string()));
        // (2, 0) は空のまま
        range.set_value((3, 0), Data::String("no".to_string()));
        range.set_value((4, 0), Data::String("yes".to_string()));

        let column =
            ColumnReader::extract_column(&range, &ColumnSelector::Index(0), true).unwrap();
        assert_eq!(column.values.len(), 3);
    }

    #[test]
    fn test_extract_column_without_header() {
        let mut range = Range::new((0, 0), (2, 0));
        range.set_value((0, 0), Data::Int(1));
        range.set_value((1, 0), Data::Int(2));
        range.set_value((2, 0), Data::Int(2));

        let column =
            ColumnReader::extract_column(&range, &ColumnSelector::Index(0), false).unwrap();
        // ヘッダーなし: タイトルは列名、1行目も値として扱う
        assert_eq!(column.title, "A");
        assert_eq!(column.values.len(), 3);
    }

    // ワークブックを開く経路のテストは、実際のXLSXファイルが必要なため
    // 統合テスト（tests/）で実装します。
}
