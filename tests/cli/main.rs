use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod build;
mod init;
mod lookup;

const BIN_NAME: &str = "statici18n";

pub const SCRIPT: &str = "window.alert(gettext('Hello World'));\n";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // stop config discovery at the project directory
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with `en`, `fr` and `pt_BR` catalogs, a `templates` directory
    /// and `build/script.js`.
    pub fn with_app() -> Result<Self> {
        let test = Self::new()?;
        test.write_catalog("en", &[])?;
        test.write_catalog("fr", &[("Hello World", "Bonjour tout le monde")])?;
        test.write_catalog("pt_BR", &[("Hello World", "Olá mundo")])?;
        test.write_file("locale/templates/LC_MESSAGES/messages.pot", "")?;
        test.write_file("build/script.js", SCRIPT)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn write_catalog(&self, locale: &str, entries: &[(&str, &str)]) -> Result<()> {
        let mut content = format!(
            "msgid \"\"\nmsgstr \"\"\n\
             \"Project-Id-Version: app 1.0\\n\"\n\
             \"POT-Creation-Date: 2024-01-01 00:00+0000\\n\"\n\
             \"PO-Revision-Date: 2024-01-02 00:00+0000\\n\"\n\
             \"Language-Team: {locale}\\n\"\n\
             \"MIME-Version: 1.0\\n\"\n\
             \"Content-Type: text/plain; charset=UTF-8\\n\"\n\
             \"Content-Transfer-Encoding: 8bit\\n\"\n\
             \"Language: {locale}\\n\"\n\
             \"Plural-Forms: nplurals=2; plural=(n != 1);\\n\"\n"
        );
        for (id, text) in entries {
            content.push_str(&format!("\nmsgid \"{id}\"\nmsgstr \"{text}\"\n"));
        }
        self.write_file(
            &format!("locale/{locale}/LC_MESSAGES/messages.po"),
            &content,
        )
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
