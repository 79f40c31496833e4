//! Color Module
//!
//! 16進数カラー文字列の解析を提供するモジュール。

use crate::error::ChartZeroError;
use rust_xlsxwriter::Color;

/// 系列色リストが指定されなかった場合のデフォルトパレット（赤、緑、青）
pub(crate) const DEFAULT_SERIES_COLORS: [&str; 3] = ["ff0000", "00ff00", "0000ff"];

/// データラベルのデフォルト文字色（黒）
pub(crate) const DEFAULT_LABEL_COLOR: &str = "000000";

/// 16進数カラー文字列を解析する
///
/// 先頭の`#`は取り除かれます。残りは6桁の16進数でなければなりません
/// （桁数が違えば`InvalidColor`、16進数でない文字は`ParseInt`）。
///
/// # 引数
///
/// * `input` - カラー文字列（例: `"#ff0000"` または `"ff0000"`）
pub(crate) fn parse_hex_color(input: &str) -> Result<Color, ChartZeroError> {
    let hex = input.strip_prefix('#').unwrap_or(input);

    if hex.len() != 6 {
        return Err(ChartZeroError::InvalidColor(input.to_string()));
    }

    let rgb = u32::from_str_radix(hex, 16)?;
    Ok(Color::RGB(rgb))
}
