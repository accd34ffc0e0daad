use std::{collections::BTreeMap, fmt, io};

/// Keyed loading error. Only catalogue, settings and mesh loading can fail;
/// page operations themselves never return errors.
#[derive(Debug)]
pub struct DeviceVisError {
    pub key: &'static str,
    pub args: BTreeMap<&'static str, String>,
    pub causes: Vec<DeviceVisCause>,
}

#[derive(Debug)]
pub enum DeviceVisCause {
    DeviceVis(Box<DeviceVisError>),
    Std(Box<dyn std::error::Error + Send + Sync>),
}

impl DeviceVisError {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            args: BTreeMap::new(),
            causes: Vec::new(),
        }
    }

    pub fn with_arg(mut self, k: &'static str, v: impl ToString) -> Self {
        self.args.insert(k, v.to_string());
        self
    }

    pub fn push_cause(mut self, cause: DeviceVisError) -> Self {
        self.causes.push(DeviceVisCause::DeviceVis(Box::new(cause)));
        self
    }

    pub fn push_std(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.causes.push(DeviceVisCause::Std(Box::new(cause)));
        self
    }

    pub fn arg(&self, k: &str) -> Option<&str> {
        self.args.get(k).map(String::as_str)
    }
}

impl fmt::Display for DeviceVisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.key)?;
        let mut first = true;
        for (k, v) in &self.args {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{k}={v}")?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for DeviceVisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.causes.iter().find_map(|c| match c {
            DeviceVisCause::DeviceVis(e) => Some(e.as_ref() as &dyn std::error::Error),
            DeviceVisCause::Std(e) => Some(e.as_ref()),
        })
    }
}

impl From<io::Error> for DeviceVisError {
    fn from(err: io::Error) -> Self {
        DeviceVisError::new("io-error").push_std(err)
    }
}

impl From<serde_json::Error> for DeviceVisError {
    fn from(err: serde_json::Error) -> Self {
        DeviceVisError::new("json-error")
            .with_arg("line", err.line())
            .with_arg("column", err.column())
            .push_std(err)
    }
}

impl From<confy::ConfyError> for DeviceVisError {
    fn from(err: confy::ConfyError) -> Self {
        DeviceVisError::new("confy-error").push_std(err)
    }
}
