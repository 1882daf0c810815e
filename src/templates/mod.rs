pub const TEMPLATE_URL: &str = "https://github.com/sndrummer/cmake_cpp_basic_template.git";

pub const PLACEHOLDER: &str = "@PROJECT_NAME@";

/// Files inside the template that carry the placeholder, relative to the project root.
pub const TEMPLATE_FILES: &[&str] = &["CMakeLists.txt", ".vscode/launch.json"];

pub const LAUNCH_JSON: &str = ".vscode/launch.json";

pub const BUILD_DIR: &str = "build";

pub const VCS_DIR: &str = ".git";

pub const CMAKE: &str = "cmake";

pub const GIT: &str = "git";

pub const C_COMPILER: &str = "/usr/bin/gcc";

pub const CXX_COMPILER: &str = "/usr/bin/g++";

pub const RULE: &str =
    "--------------------------------------------------------------------------------------------";
