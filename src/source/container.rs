//! Container log source.
//!
//! Fetches the current logs of one container once, through the `kubectl logs`
//! command. Cluster credentials and context selection are left to kubectl.

use crate::model::error::InputError;
use std::process::{Command, Output};
use tracing::{debug, info};

/// Identifies the container whose logs are fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerTarget {
    /// Pod name.
    pub pod: String,
    /// Namespace the pod lives in.
    pub namespace: String,
    /// Container within the pod.
    pub container: String,
}

impl ContainerTarget {
    /// Build a target only when all three parts are present and non-empty.
    pub fn from_parts(
        pod: Option<String>,
        namespace: Option<String>,
        container: Option<String>,
    ) -> Option<Self> {
        let non_empty = |s: Option<String>| s.filter(|v| !v.trim().is_empty());
        Some(Self {
            pod: non_empty(pod)?,
            namespace: non_empty(namespace)?,
            container: non_empty(container)?,
        })
    }
}

/// One-shot `kubectl logs` reader.
#[derive(Debug, Clone)]
pub struct ContainerSource {
    target: ContainerTarget,
    kubectl: String,
}

impl ContainerSource {
    /// Create a source that runs `kubectl` (or the given replacement binary).
    pub fn new(target: ContainerTarget, kubectl: impl Into<String>) -> Self {
        Self {
            target,
            kubectl: kubectl.into(),
        }
    }

    /// The container this source reads from.
    pub fn target(&self) -> &ContainerTarget {
        &self.target
    }

    /// Binary that is run.
    pub fn kubectl(&self) -> &str {
        &self.kubectl
    }

    /// Arguments passed to kubectl.
    pub fn args(&self) -> Vec<String> {
        vec![
            "logs".to_string(),
            self.target.pod.clone(),
            "-n".to_string(),
            self.target.namespace.clone(),
            "-c".to_string(),
            self.target.container.clone(),
        ]
    }

    /// Run kubectl and return its stdout split into lines.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if the binary cannot be spawned and
    /// `InputError::Command` if it exits unsuccessfully.
    pub fn read_lines(&self) -> Result<Vec<String>, InputError> {
        info!(
            pod = %self.target.pod,
            namespace = %self.target.namespace,
            container = %self.target.container,
            "Fetching container logs"
        );
        let output = Command::new(&self.kubectl).args(self.args()).output()?;
        self.lines_from_output(output)
    }

    fn lines_from_output(&self, output: Output) -> Result<Vec<String>, InputError> {
        if !output.status.success() {
            return Err(InputError::Command {
                command: format!("{} {}", self.kubectl, self.args().join(" ")),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let lines: Vec<String> = stdout
            .lines()
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect();
        debug!(count = lines.len(), "Container log lines received");
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> ContainerTarget {
        ContainerTarget {
            pod: "web-7d4f".to_string(),
            namespace: "prod".to_string(),
            container: "istio-proxy".to_string(),
        }
    }

    #[test]
    fn from_parts_requires_all_three() {
        assert!(ContainerTarget::from_parts(
            Some("p".to_string()),
            Some("n".to_string()),
            None
        )
        .is_none());
        assert!(ContainerTarget::from_parts(
            Some("p".to_string()),
            Some("".to_string()),
            Some("c".to_string())
        )
        .is_none());
        assert_eq!(
            ContainerTarget::from_parts(
                Some("web-7d4f".to_string()),
                Some("prod".to_string()),
                Some("istio-proxy".to_string())
            ),
            Some(target())
        );
    }

    #[test]
    fn args_name_pod_namespace_and_container() {
        let source = ContainerSource::new(target(), "kubectl");
        assert_eq!(
            source.args(),
            vec!["logs", "web-7d4f", "-n", "prod", "-c", "istio-proxy"]
        );
    }

    #[test]
    fn missing_binary_is_io_error() {
        let source = ContainerSource::new(target(), "elv-definitely-not-a-real-binary");
        assert!(matches!(source.read_lines(), Err(InputError::Io(_))));
    }

    #[cfg(unix)]
    #[test]
    fn successful_output_is_split_into_lines() {
        use std::os::unix::process::ExitStatusExt;

        let source = ContainerSource::new(target(), "kubectl");
        let output = Output {
            status: std::process::ExitStatus::from_raw(0),
            stdout: b"{\"a\":1}\r\n{\"a\":2}\n".to_vec(),
            stderr: Vec::new(),
        };
        let lines = source.lines_from_output(output).unwrap();
        assert_eq!(lines, vec!["{\"a\":1}", "{\"a\":2}"]);
    }

    #[cfg(unix)]
    #[test]
    fn failed_output_is_command_error() {
        use std::os::unix::process::ExitStatusExt;

        let source = ContainerSource::new(target(), "kubectl");
        let output = Output {
            // Raw wait status: exit code 1
            status: std::process::ExitStatus::from_raw(1 << 8),
            stdout: Vec::new(),
            stderr: b"pods \"web-7d4f\" not found\n".to_vec(),
        };
        match source.lines_from_output(output) {
            Err(InputError::Command { command, stderr, .. }) => {
                assert!(command.starts_with("kubectl logs web-7d4f"));
                assert_eq!(stderr, "pods \"web-7d4f\" not found");
            }
            other => panic!("expected Command error, got {:?}", other),
        }
    }
}
