//! Chart Options Module
//!
//! グラフ外観オプションとそのデフォルト解決を提供するモジュール。
//! Fluent Builder APIで`ChartStyle`を段階的に構築する。

use crate::api::LegendPosition;
use crate::error::ChartZeroError;
use serde::{Deserialize, Serialize};

/// データラベルのデフォルトフォントサイズ（ポイント）
pub(crate) const DEFAULT_LABEL_SIZE: u16 = 12;

/// 凡例のデフォルトフォントサイズ（ポイント）
pub(crate) const DEFAULT_LEGEND_FONT_SIZE: u16 = 18;

/// データラベルのデフォルトフォント
pub(crate) const DEFAULT_FONT: &str = "Arial";

/// グラフ外観オプション
///
/// 各フィールドは`Option`で保持され、`None`は「未指定」を意味します。
/// 未指定のオプションには適用時に文書化されたデフォルトが使われます。
/// 「明示的にfalseを指定した」状態と「未指定」は区別されます。凡例は
/// この区別に依存する唯一のオプションで、`legend`が`None`の間は凡例の
/// 状態に一切触れません。
///
/// # オプション一覧とデフォルト
///
/// | フィールド | 効果 | 未指定時 |
/// |---|---|---|
/// | `axis_labels` | 値軸の表示/非表示 | 非表示 |
/// | `major_gridlines` | 主グリッド線の表示/非表示 | 非表示 |
/// | `minor_gridlines` | 補助グリッド線の表示/非表示 | 非表示 |
/// | `data_labels` | データラベルの表示/非表示 | 非表示 |
/// | `label_color` | データラベルの文字色（`#`任意） | 黒 |
/// | `label_size` | データラベルのフォントサイズ（pt） | 12 |
/// | `font` | データラベルのフォント | "Arial" |
/// | `chart_colors` | データ点ごとの塗り色リスト | 赤・緑・青 |
/// | `legend` | 凡例の位置（指定時のみ凡例を表示） | 変更なし |
/// | `legend_font_size` | 凡例のフォントサイズ（pt） | 18 |
/// | `auto_center` | 文書化のみ（適用処理は持たない） | true |
///
/// JSON設定のフィールド名はこの表のフィールド名と同一です。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// 値軸ラベルの表示
    pub axis_labels: Option<bool>,

    /// 主グリッド線の表示
    pub major_gridlines: Option<bool>,

    /// 補助グリッド線の表示
    pub minor_gridlines: Option<bool>,

    /// データラベルの表示
    pub data_labels: Option<bool>,

    /// データラベルの文字色（16進数、先頭の`#`は任意）
    pub label_color: Option<String>,

    /// データラベルのフォントサイズ（ポイント）
    pub label_size: Option<u16>,

    /// データラベルのフォント名
    pub font: Option<String>,

    /// データ点ごとの塗り色リスト（16進数、先頭の`#`は任意）
    pub chart_colors: Option<Vec<String>>,

    /// 凡例の位置。指定された場合のみ凡例が有効になる
    pub legend: Option<LegendPosition>,

    /// 凡例のフォントサイズ（ポイント）
    pub legend_font_size: Option<u16>,

    /// グラフの自動センタリング（文書化のみ。適用処理は持たない）
    pub auto_center: Option<bool>,
}

/// グラフスタイル
///
/// `Custom`は個別オプションの組み合わせ、`Canonical`は「すべて有効」の
/// 固定構成です。`Canonical`を選んだ時点で呼び出し側のオプションは
/// 破棄されるため、全有効化の特別扱いは構築時のこの一点に集約されます。
///
/// # 使用例
///
/// ```rust
/// use chartzero::{ChartStyle, ChartStyleBuilder, LegendPosition};
///
/// # fn main() -> Result<(), chartzero::ChartZeroError> {
/// // 個別指定
/// let style = ChartStyleBuilder::new()
///     .with_data_labels(true)
///     .with_legend(LegendPosition::Right)
///     .build()?;
///
/// // 全有効化
/// let style = ChartStyle::Canonical;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartStyle {
    /// 固定の「すべて有効」構成
    Canonical,

    /// 個別オプションの組み合わせ
    Custom(ChartOptions),
}

impl Default for ChartStyle {
    /// すべて未指定の`Custom`スタイル（各オプションはデフォルトに解決される）
    fn default() -> Self {
        ChartStyle::Custom(ChartOptions::default())
    }
}

impl ChartStyle {
    /// `Canonical`が表す固定構成
    ///
    /// 軸ラベル・両グリッド線・データラベル（黒、12pt、Arial）・右凡例・
    /// 自動センタリングをすべて有効にした構成です。`chart_colors`と
    /// `legend_font_size`は未指定のまま残り、適用時のデフォルト
    /// （赤・緑・青のパレット、18pt）に解決されます。
    pub fn canonical_options() -> ChartOptions {
        ChartOptions {
            axis_labels: Some(true),
            major_gridlines: Some(true),
            minor_gridlines: Some(true),
            data_labels: Some(true),
            label_color: Some("#000000".to_string()),
            label_size: Some(DEFAULT_LABEL_SIZE),
            font: Some(DEFAULT_FONT.to_string()),
            chart_colors: None,
            legend: Some(LegendPosition::Right),
            legend_font_size: None,
            auto_center: Some(true),
        }
    }

    /// スタイルをオプション集合へ解決する
    ///
    /// `Canonical`は固定構成に、`Custom`は保持しているオプションに
    /// 解決されます。
    pub fn options(&self) -> ChartOptions {
        match self {
            ChartStyle::Canonical => Self::canonical_options(),
            ChartStyle::Custom(options) => options.clone(),
        }
    }

    /// JSON文字列からスタイルを読み込む
    ///
    /// フィールド名は`ChartOptions`のフィールド名と同一です。追加の
    /// `all`キーがtrueの場合、他のキーをすべて無視して`Canonical`に
    /// なります。未知の凡例位置などの不正な値はエラーになります。
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use chartzero::ChartStyle;
    ///
    /// # fn main() -> Result<(), chartzero::ChartZeroError> {
    /// let style = ChartStyle::from_json_str(
    ///     r#"{ "data_labels": true, "legend": "bottom" }"#,
    /// )?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ChartZeroError> {
        let raw: RawStyle = serde_json::from_str(json)
            .map_err(|e| ChartZeroError::Config(format!("Invalid style JSON: {}", e)))?;
        Ok(raw.into_style())
    }

    /// リーダーからJSON形式のスタイルを読み込む
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, ChartZeroError> {
        let raw: RawStyle = serde_json::from_reader(reader)
            .map_err(|e| ChartZeroError::Config(format!("Invalid style JSON: {}", e)))?;
        Ok(raw.into_style())
    }
}

/// JSON読み込み用の中間表現（`all`キー + 個別オプション）
#[derive(Debug, Deserialize)]
struct RawStyle {
    #[serde(default)]
    all: bool,

    #[serde(flatten)]
    options: ChartOptions,
}

impl RawStyle {
    fn into_style(self) -> ChartStyle {
        if self.all {
            ChartStyle::Canonical
        } else {
            ChartStyle::Custom(self.options)
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `ChartStyle`を段階的に構築するためのビルダーです。すべての設定
/// 項目は省略可能で、省略されたオプションは適用時にデフォルトへ
/// 解決されます。
///
/// # 使用例
///
/// ```rust
/// use chartzero::{ChartStyleBuilder, LegendPosition};
///
/// # fn main() -> Result<(), chartzero::ChartZeroError> {
/// let style = ChartStyleBuilder::new()
///     .with_axis_labels(true)
///     .with_major_gridlines(true)
///     .with_data_labels(true)
///     .with_label_color("#333333")
///     .with_legend(LegendPosition::Bottom)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ChartStyleBuilder {
    /// 構築中のオプション
    options: ChartOptions,

    /// 全有効化フラグ（`enable_all`で設定）
    all: bool,
}

impl ChartStyleBuilder {
    /// すべて未指定のビルダーインスタンスを生成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 値軸ラベルの表示を指定する
    pub fn with_axis_labels(mut self, visible: bool) -> Self {
        self.options.axis_labels = Some(visible);
        self
    }

    /// 主グリッド線の表示を指定する
    pub fn with_major_gridlines(mut self, visible: bool) -> Self {
        self.options.major_gridlines = Some(visible);
        self
    }

    /// 補助グリッド線の表示を指定する
    pub fn with_minor_gridlines(mut self, visible: bool) -> Self {
        self.options.minor_gridlines = Some(visible);
        self
    }

    /// データラベルの表示を指定する
    pub fn with_data_labels(mut self, visible: bool) -> Self {
        self.options.data_labels = Some(visible);
        self
    }

    /// データラベルの文字色を指定する（16進数、先頭の`#`は任意）
    pub fn with_label_color(mut self, color: impl Into<String>) -> Self {
        self.options.label_color = Some(color.into());
        self
    }

    /// データラベルのフォントサイズを指定する（ポイント）
    pub fn with_label_size(mut self, points: u16) -> Self {
        self.options.label_size = Some(points);
        self
    }

    /// データラベルのフォント名を指定する
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.options.font = Some(font.into());
        self
    }

    /// データ点ごとの塗り色リストを指定する
    ///
    /// 色は先頭のデータ点から位置順に消費されます。巡回再利用は
    /// 行われないため、リストはデータ点数以上の長さが必要です。
    pub fn with_chart_colors(mut self, colors: Vec<String>) -> Self {
        self.options.chart_colors = Some(colors);
        self
    }

    /// 凡例を指定位置で有効化する
    pub fn with_legend(mut self, position: LegendPosition) -> Self {
        self.options.legend = Some(position);
        self
    }

    /// 凡例のフォントサイズを指定する（ポイント）
    pub fn with_legend_font_size(mut self, points: u16) -> Self {
        self.options.legend_font_size = Some(points);
        self
    }

    /// 自動センタリングを指定する（文書化のみ。適用処理は持たない）
    pub fn with_auto_center(mut self, auto_center: bool) -> Self {
        self.options.auto_center = Some(auto_center);
        self
    }

    /// すべての外観オプションを有効化する
    ///
    /// `build()`は他の設定内容に関わらず`ChartStyle::Canonical`を
    /// 返すようになります。
    pub fn enable_all(mut self) -> Self {
        self.all = true;
        self
    }

    /// 設定を検証し、`ChartStyle`を生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `ChartZeroError::Config(String)`: 設定の検証に失敗した場合
    ///   * `label_size`または`legend_font_size`が0
    ///   * `chart_colors`が空リスト
    pub fn build(self) -> Result<ChartStyle, ChartZeroError> {
        if self.all {
            return Ok(ChartStyle::Canonical);
        }

        // 1. フォントサイズの検証
        if self.options.label_size == Some(0) {
            return Err(ChartZeroError::Config(
                "label_size must be greater than 0".to_string(),
            ));
        }
        if self.options.legend_font_size == Some(0) {
            return Err(ChartZeroError::Config(
                "legend_font_size must be greater than 0".to_string(),
            ));
        }

        // 2. 色リストの検証（空リストはすべての系列で失敗するため弾く）
        if let Some(ref colors) = self.options.chart_colors {
            if colors.is_empty() {
                return Err(ChartZeroError::Config(
                    "chart_colors must not be an empty list".to_string(),
                ));
            }
        }

        Ok(ChartStyle::Custom(self.options))
    }
}
