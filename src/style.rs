//! Chart Style Application Module
//!
//! 解決済みのオプションをrust_xlsxwriterのグラフオブジェクトへ
//! 適用するモジュール。各関数はグラフの一部分への一回限りの
//! 冪等な設定適用で、内部状態は持ちません。

use crate::api::LegendPosition;
use crate::color::{parse_hex_color, DEFAULT_LABEL_COLOR, DEFAULT_SERIES_COLORS};
use crate::error::ChartZeroError;
use crate::options::{ChartOptions, DEFAULT_FONT, DEFAULT_LABEL_SIZE, DEFAULT_LEGEND_FONT_SIZE};
use rust_xlsxwriter::{
    Chart, ChartDataLabel, ChartFont, ChartLegendPosition, ChartPoint, ChartSeries, ChartSolidFill,
};

impl From<LegendPosition> for ChartLegendPosition {
    fn from(position: LegendPosition) -> Self {
        match position {
            LegendPosition::Left => ChartLegendPosition::Left,
            LegendPosition::Right => ChartLegendPosition::Right,
            LegendPosition::Top => ChartLegendPosition::Top,
            LegendPosition::Bottom => ChartLegendPosition::Bottom,
        }
    }
}

/// 凡例の設定を適用する
///
/// `legend`が指定されている場合のみ、指定位置の凡例を有効化し、
/// フォントサイズ（デフォルト18pt）を設定します。未指定の場合、
/// 凡例の状態には一切触れません（明示的な無効化は行いません）。
pub(crate) fn configure_legend(chart: &mut Chart, options: &ChartOptions) {
    let Some(position) = options.legend else {
        return;
    };

    let size = options.legend_font_size.unwrap_or(DEFAULT_LEGEND_FONT_SIZE);
    let legend = chart.legend();
    legend.set_position(position.into());
    legend.set_font(&ChartFont::new().set_size(f64::from(size)));
}

/// 値軸の表示とグリッド線の設定を適用する
///
/// 軸ラベル・主グリッド線・補助グリッド線はそれぞれ独立に解決され、
/// 未指定時はいずれも非表示になります。
pub(crate) fn configure_value_axis(chart: &mut Chart, options: &ChartOptions) {
    // 横棒グラフでは値軸は水平方向の軸（y_axis）になる
    if !options.axis_labels.unwrap_or(false) {
        chart.y_axis().set_hidden(true);
    }

    chart
        .y_axis()
        .set_major_gridlines(options.major_gridlines.unwrap_or(false));
    chart
        .y_axis()
        .set_minor_gridlines(options.minor_gridlines.unwrap_or(false));
}

/// データラベルの設定を系列へ適用する
///
/// `data_labels`が有効な場合のみラベルを表示し、サイズ（デフォルト
/// 12pt）、フォント（デフォルトArial）、文字色（デフォルト黒）を
/// 設定します。無効・未指定の場合、系列はラベルなしのままです。
pub(crate) fn configure_data_labels(
    series: &mut ChartSeries,
    options: &ChartOptions,
) -> Result<(), ChartZeroError> {
    if !options.data_labels.unwrap_or(false) {
        return Ok(());
    }

    let size = options.label_size.unwrap_or(DEFAULT_LABEL_SIZE);
    let font_name = options.font.as_deref().unwrap_or(DEFAULT_FONT);
    let color = parse_hex_color(options.label_color.as_deref().unwrap_or(DEFAULT_LABEL_COLOR))?;

    series.set_data_label(
        &ChartDataLabel::new().show_value().set_font(
            &ChartFont::new()
                .set_size(f64::from(size))
                .set_name(font_name)
                .set_color(color),
        ),
    );

    Ok(())
}

/// 系列の各データ点へ塗り色を割り当てる
///
/// 色は`chart_colors`（未指定時は赤・緑・青のデフォルトパレット）
/// から位置順に消費されます。色は巡回再利用されないため、
/// `point_count`が色数を超えた場合は`ColorsExhausted`になります。
pub(crate) fn set_series_colors(
    series: &mut ChartSeries,
    point_count: usize,
    options: &ChartOptions,
) -> Result<(), ChartZeroError> {
    let colors: Vec<&str> = match options.chart_colors {
        Some(ref list) => list.iter().map(String::as_str).collect(),
        None => DEFAULT_SERIES_COLORS.to_vec(),
    };

    if point_count > colors.len() {
        return Err(ChartZeroError::ColorsExhausted {
            points: point_count,
            colors: colors.len(),
        });
    }

    let mut points = Vec::with_capacity(point_count);
    for color in colors.iter().take(point_count) {
        let rgb = parse_hex_color(color)?;
        points.push(ChartPoint::new().set_format(ChartSolidFill::new().set_color(rgb)));
    }
    series.set_points(&points);

    Ok(())
}
