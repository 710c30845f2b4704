use std::path::Path;
use std::process::Command;

use crate::config::HooksConfig;
use crate::ui;

/// Combined output and exit status of a hook.
///
/// `output` is exactly what the command wrote; `error` carries the launch
/// failure or exit status when `success` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookOutput {
    pub output: String,
    pub success: bool,
    pub error: Option<String>,
}

/// A best-effort step run after the component files are written.
pub trait PostGenerateHook {
    fn name(&self) -> &str;
    fn run(&self, working_dir: &Path, component_dir: &Path) -> HookOutput;
}

/// How the component directory is handed to a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookTarget {
    /// The directory itself.
    Path,
    /// Everything below the directory, as `<dir>/**`.
    RecursiveGlob,
}

impl HookTarget {
    pub fn expand(self, component_dir: &Path) -> String {
        let dir = component_dir.to_string_lossy();
        match self {
            HookTarget::Path => dir.to_string(),
            HookTarget::RecursiveGlob => format!("{}/**", dir),
        }
    }
}

/// Runs an external program with the expanded target appended to its args.
#[derive(Debug, Clone)]
pub struct CommandHook {
    name: String,
    program: String,
    args: Vec<String>,
    target: HookTarget,
}

impl CommandHook {
    /// Builds a hook from an argv; an empty argv yields no hook.
    pub fn from_argv(name: &str, argv: &[String], target: HookTarget) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            name: name.to_string(),
            program: program.clone(),
            args: args.to_vec(),
            target,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl PostGenerateHook for CommandHook {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, working_dir: &Path, component_dir: &Path) -> HookOutput {
        let mut args = self.args.clone();
        args.push(self.target.expand(component_dir));
        run_command(working_dir, &self.program, &args)
    }
}

/// Builds the format and lint hooks from config, skipping disabled ones.
pub fn hooks_from_config(config: &HooksConfig) -> Vec<Box<dyn PostGenerateHook>> {
    let mut hooks: Vec<Box<dyn PostGenerateHook>> = Vec::new();
    if let Some(hook) = CommandHook::from_argv("format", &config.format, HookTarget::Path) {
        hooks.push(Box::new(hook));
    }
    if let Some(hook) = CommandHook::from_argv("lint", &config.lint, HookTarget::RecursiveGlob) {
        hooks.push(Box::new(hook));
    }
    hooks
}

/// Runs a command to completion in `working_dir`, capturing stdout then stderr.
pub fn run_command(working_dir: &Path, program: &str, args: &[String]) -> HookOutput {
    let output = match Command::new(program)
        .args(args)
        .current_dir(working_dir)
        .output()
    {
        Ok(output) => output,
        Err(err) => {
            return HookOutput {
                output: String::new(),
                success: false,
                error: Some(format!("failed to run {}: {}", program, err)),
            };
        }
    };

    let mut text = String::from_utf8_lossy(&output.stdout).to_string();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    let success = output.status.success();
    HookOutput {
        output: text,
        success,
        error: (!success).then(|| format!("{} exited with {}", program, output.status)),
    }
}

/// Runs every hook in order, echoing output and warning on failure.
pub fn run_hooks(hooks: &[Box<dyn PostGenerateHook>], working_dir: &Path, component_dir: &Path) {
    for hook in hooks {
        let spinner = ui::spinner(&format!("Running {}...", hook.name()));
        let result = hook.run(working_dir, component_dir);
        spinner.finish_and_clear();

        if !result.success {
            let reason = result.error.as_deref().unwrap_or("command failed");
            ui::warn(&format!("Error executing {} command: {}", hook.name(), reason));
        }
        ui::command_output(&result.output);
    }
}
