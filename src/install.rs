//! Install instructions shown next to each component's source.

use crate::model::ComponentDescriptor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstallMethod {
    Curl,
    Wget,
    Cargo,
}

impl InstallMethod {
    pub const ALL: [InstallMethod; 3] = [InstallMethod::Curl, InstallMethod::Wget, InstallMethod::Cargo];

    pub fn label(self) -> &'static str {
        match self {
            InstallMethod::Curl => "curl",
            InstallMethod::Wget => "wget",
            InstallMethod::Cargo => "cargo",
        }
    }
}

/// `hero-minimalism` -> `hero_minimalism`
pub fn module_name(id: &str) -> String {
    id.replace('-', "_")
}

/// Where the raw snippet is published.
pub fn snippet_url(site_url: &str, id: &str) -> String {
    format!("{}/r/{}.rs", site_url.trim_end_matches('/'), id)
}

pub fn install_command(d: &ComponentDescriptor, method: InstallMethod, site_url: &str) -> String {
    let url = snippet_url(site_url, d.id);
    let dest = format!("src/components/{}.rs", module_name(d.id));
    match method {
        InstallMethod::Curl => format!("curl -fsSL {} -o {}", url, dest),
        InstallMethod::Wget => format!("wget -q {} -O {}", url, dest),
        InstallMethod::Cargo => d
            .dependencies
            .iter()
            .map(|dep| format!("cargo add {}", dep))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Line to add to `src/components/mod.rs` after downloading.
pub fn module_declaration(d: &ComponentDescriptor) -> String {
    format!("pub mod {};", module_name(d.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComponentKind;

    #[test]
    fn download_commands_target_snake_case_module() {
        let d = ComponentKind::HeroMinimalism.descriptor();
        assert_eq!(
            install_command(d, InstallMethod::Curl, "https://ui.example.dev/"),
            "curl -fsSL https://ui.example.dev/r/hero-minimalism.rs -o src/components/hero_minimalism.rs"
        );
        assert_eq!(
            install_command(d, InstallMethod::Wget, "https://ui.example.dev"),
            "wget -q https://ui.example.dev/r/hero-minimalism.rs -O src/components/hero_minimalism.rs"
        );
        assert_eq!(module_declaration(d), "pub mod hero_minimalism;");
    }

    #[test]
    fn cargo_lists_one_line_per_dependency() {
        let d = ComponentKind::CtaSplit.descriptor();
        let cmd = install_command(d, InstallMethod::Cargo, "");
        assert_eq!(cmd.lines().count(), d.dependencies.len());
        assert!(cmd.lines().all(|l| l.starts_with("cargo add ")));
    }
}
