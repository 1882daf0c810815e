use crate::templates;

pub const TEMPLATE_URL_VAR: &str = "CMAKE_NEW_TEMPLATE_URL";
pub const CMAKE_VAR: &str = "CMAKE_NEW_CMAKE";
pub const GIT_VAR: &str = "CMAKE_NEW_GIT";
pub const CC_VAR: &str = "CMAKE_NEW_CC";
pub const CXX_VAR: &str = "CMAKE_NEW_CXX";

/// External tools and the template location used for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub template_url: String,
    pub cmake: String,
    pub git: String,
    pub c_compiler: String,
    pub cxx_compiler: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_url: templates::TEMPLATE_URL.to_string(),
            cmake: templates::CMAKE.to_string(),
            git: templates::GIT.to_string(),
            c_compiler: templates::C_COMPILER.to_string(),
            cxx_compiler: templates::CXX_COMPILER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to the defaults for unset or empty keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: String| {
            lookup(key).filter(|v| !v.trim().is_empty()).unwrap_or(default)
        };
        let defaults = Self::default();

        Self {
            template_url: get(TEMPLATE_URL_VAR, defaults.template_url),
            cmake: get(CMAKE_VAR, defaults.cmake),
            git: get(GIT_VAR, defaults.git),
            c_compiler: get(CC_VAR, defaults.c_compiler),
            cxx_compiler: get(CXX_VAR, defaults.cxx_compiler),
        }
    }

    pub fn cmake_args(&self) -> Vec<String> {
        vec![
            format!("-DCMAKE_C_COMPILER={}", self.c_compiler),
            format!("-DCMAKE_CXX_COMPILER={}", self.cxx_compiler),
            "..".to_string(),
        ]
    }
}
