use crate::config::rules::{build_rules, default_prefixes, default_suffixes};
use crate::core::counters::DEFAULT_STORE_KEY;
use crate::domain::model::RankingPolicy;
use crate::domain::ports::{ConfigProvider, CorruptStorePolicy, NormalizationRule};
use crate::utils::error::{Result, TurnError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_STORE_PATH: &str = "./data";

/// 所有區段皆為選填，空檔案即採用內建預設值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub normalization: NormalizationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: String,
    #[serde(default = "default_store_key")]
    pub key: String,
    #[serde(default)]
    pub on_corrupt: CorruptStorePolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingConfig {
    #[serde(default)]
    pub policy: RankingPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizationConfig {
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,
    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,
}

fn default_store_path() -> String {
    DEFAULT_STORE_PATH.to_string()
}

fn default_store_key() -> String {
    DEFAULT_STORE_KEY.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            key: default_store_key(),
            on_corrupt: CorruptStorePolicy::default(),
        }
    }
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            prefixes: default_prefixes(),
            suffixes: default_suffixes(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TurnError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 先展開環境變數，再交給 toml 解析
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TurnError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${STORE_DIR})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TurnError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        // 驗證儲存位置與鍵名
        validation::validate_path("store.path", &self.store.path)?;
        validation::validate_store_key("store.key", &self.store.key)?;

        // 驗證前綴與後綴詞表
        validation::validate_rule_tokens("normalization.prefixes", &self.normalization.prefixes)?;
        validation::validate_rule_tokens("normalization.suffixes", &self.normalization.suffixes)?;
        Ok(())
    }

    /// 取得計數檔的存放目錄
    pub fn store_path(&self) -> &str {
        &self.store.path
    }
}

impl ConfigProvider for TomlConfig {
    fn store_key(&self) -> &str {
        &self.store.key
    }

    fn ranking_policy(&self) -> RankingPolicy {
        self.ranking.policy
    }

    fn corrupt_store_policy(&self) -> CorruptStorePolicy {
        self.store.on_corrupt
    }

    fn normalization_rules(&self) -> Vec<NormalizationRule> {
        build_rules(&self.normalization.prefixes, &self.normalization.suffixes)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
