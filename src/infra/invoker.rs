//! External build tool invocation
//!
//! Spawns the configured build tool synchronously and reports its exit
//! status as a plain boolean. Captured output is appended to a
//! per-configuration log file so `buildwatch logs` has something to show.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::BuildSection;
use crate::core::orchestrator::BuildInvoker;
use crate::core::project::BuildConfiguration;
use crate::error::InvokerError;

/// Process-spawning build invoker
///
/// The tool binary is resolved once at construction; a missing tool is a
/// loud wiring-time error rather than a per-build `false`.
#[derive(Debug)]
pub struct ProcessBuildInvoker {
    program: PathBuf,
    build_args: Vec<String>,
    clean_args: Vec<String>,
    rebuild_flag: String,
    configuration_flag: String,
    logs_dir: PathBuf,
    working_dir: PathBuf,
}

impl ProcessBuildInvoker {
    /// Construct an invoker from the build configuration section
    pub fn from_config(project_dir: &Path, build: &BuildSection) -> Result<Self, InvokerError> {
        if build.tool.is_empty() {
            return Err(InvokerError::ToolNotConfigured);
        }

        let tool_path = Path::new(&build.tool);
        let program = if tool_path.is_absolute() {
            tool_path.to_path_buf()
        } else {
            which::which(&build.tool).map_err(|_| InvokerError::ToolNotFound {
                tool: build.tool.clone(),
            })?
        };

        Ok(Self {
            program,
            build_args: build.build_args.clone(),
            clean_args: build.clean_args.clone(),
            rebuild_flag: build.rebuild_flag.clone(),
            configuration_flag: build.configuration_flag.clone(),
            logs_dir: project_dir.join(&build.logs_dir),
            working_dir: project_dir.to_path_buf(),
        })
    }

    /// Log file for a configuration, under the configured logs directory
    fn log_path(&self, configuration: &BuildConfiguration) -> PathBuf {
        self.logs_dir.join(format!("{configuration}.log"))
    }

    fn run(&self, args: &[String], configuration: &BuildConfiguration) -> bool {
        let mut command = Command::new(&self.program);
        command
            .args(args)
            .arg(&self.configuration_flag)
            .arg(configuration.as_str())
            .current_dir(&self.working_dir);

        tracing::debug!("Spawning build tool: {:?}", command);

        match command.output() {
            Ok(output) => {
                self.append_log(configuration, &output.stdout, &output.stderr);
                if !output.status.success() {
                    tracing::warn!(
                        "Build tool exited with {} for configuration '{}'",
                        output.status,
                        configuration
                    );
                }
                output.status.success()
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to spawn build tool '{}': {}",
                    self.program.display(),
                    e
                );
                false
            }
        }
    }

    fn append_log(&self, configuration: &BuildConfiguration, stdout: &[u8], stderr: &[u8]) {
        if let Err(e) = self.try_append_log(configuration, stdout, stderr) {
            tracing::debug!("Failed to write build log: {e}");
        }
    }

    fn try_append_log(
        &self,
        configuration: &BuildConfiguration,
        stdout: &[u8],
        stderr: &[u8],
    ) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.logs_dir)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.log_path(configuration))?;
        file.write_all(stdout)?;
        file.write_all(stderr)?;
        Ok(())
    }
}

impl BuildInvoker for ProcessBuildInvoker {
    fn build(&self, configuration: &BuildConfiguration, force_rebuild: bool) -> bool {
        let mut args = self.build_args.clone();
        if force_rebuild && !self.rebuild_flag.is_empty() {
            args.push(self.rebuild_flag.clone());
        }
        self.run(&args, configuration)
    }

    fn clean(&self, configuration: &BuildConfiguration) -> bool {
        self.run(&self.clean_args, configuration)
    }
}
