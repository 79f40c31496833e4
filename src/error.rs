//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// chartzeroクレート全体で使用するエラー型
///
/// このエラー型は、ワークブックの読み込み、集計、グラフ構成、
/// レポート出力中に発生するすべてのエラーを統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（ファイル読み込み失敗など）
/// - `Parse`: 入力ワークブックの解析中に発生したエラー（calamine由来）
/// - `Xlsx`: 出力ワークブックの生成中に発生したエラー（rust_xlsxwriter由来）
/// - `Config`: 設定の検証に失敗したエラー（無効な列指定など）
/// - `ColorsExhausted`: データ点数が色リストの長さを超えたエラー
///
/// # 使用例
///
/// ```rust,no_run
/// use chartzero::ChartZeroError;
/// use std::fs::File;
///
/// fn open_input(path: &str) -> Result<(), ChartZeroError> {
///     let file = File::open(path)?;  // Ioエラーが自動的に変換される
///     // ... 処理 ...
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum ChartZeroError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 入力ワークブックの解析中に発生したエラー
    ///
    /// calamineクレートがExcelファイルを解析する際に発生したエラーです。
    /// ファイル形式が不正、破損したファイルなどが原因となります。
    #[error("Failed to parse Excel file: {0}")]
    Parse(#[from] calamine::Error),

    /// 出力ワークブックの生成中に発生したエラー
    ///
    /// rust_xlsxwriterクレートがワークシートへの書き込みやグラフの
    /// 挿入を行う際に発生したエラーです。
    #[error("Failed to write workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// 数値の解析エラー
    ///
    /// 色文字列の16進数部分を数値へ変換できなかった場合に発生します。
    #[error("Number parse error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    /// 色文字列の形式エラー
    ///
    /// 先頭の`#`を取り除いた後の色文字列が6桁の16進数でない場合に
    /// 発生します。
    #[error("Invalid color string: '{0}' (expected 6 hex digits)")]
    InvalidColor(String),

    /// データ点数が色リストの長さを超えたエラー
    ///
    /// 系列の各データ点には色リストから位置順に色が割り当てられます。
    /// 色は巡回再利用されないため、点数が色数を超えた時点でエラーに
    /// なります。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use chartzero::ChartZeroError;
    ///
    /// let error = ChartZeroError::ColorsExhausted { points: 5, colors: 3 };
    /// println!("{}", error);
    /// // 出力: "Chart has 5 data points but only 3 colors (colors are not reused)"
    /// ```
    #[error("Chart has {points} data points but only {colors} colors (colors are not reused)")]
    ColorsExhausted {
        /// 先頭系列のデータ点数
        points: usize,
        /// 使用可能な色数
        colors: usize,
    },

    /// 設定の検証に失敗したエラー
    ///
    /// `ReportBuilder::build()`や`ChartStyleBuilder::build()`時に設定を
    /// 検証し、無効な設定が検出された場合に発生します。シートや列が
    /// 見つからない場合もこのエラーになります。
    #[error("Configuration error: {0}")]
    Config(String),

    /// セキュリティ制限に違反したエラー
    ///
    /// 入力ファイルサイズ制限などに違反した場合に発生します。
    #[error("Security violation: {0}")]
    SecurityViolation(String),
}
