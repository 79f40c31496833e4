//! Security Module
//!
//! 入力ワークブック処理時のセキュリティ制限を定義するモジュール。

/// セキュリティ設定
///
/// 入力ファイル処理時の制限を定義します。
#[derive(Debug, Clone)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    /// デフォルト: 2GB (2_147_483_648 bytes)
    pub max_input_file_size: u64,

    /// 1シートあたりの最大セル数
    /// デフォルト: 50,000,000
    pub max_cell_count: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: 2_147_483_648, // 2GB
            max_cell_count: 50_000_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = SecurityConfig::default();
        assert_eq!(config.max_input_file_size, 2_147_483_648);
        assert_eq!(config.max_cell_count, 50_000_000);
    }
}
