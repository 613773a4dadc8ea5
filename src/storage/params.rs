//! Typed parameter bag for store operations

use serde::Serialize;

/// Value bound to an operation parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i32),
    Text(String),
    Json(serde_json::Value),
}

/// One named parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcedureParam {
    pub name: String,
    pub value: ParamValue,
}

/// Ordered, named parameters for a single operation call
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProcedureParams {
    params: Vec<ProcedureParam>,
}

impl ProcedureParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn int<S: Into<String>>(mut self, name: S, value: i32) -> Self {
        self.push(name, ParamValue::Int(value));
        self
    }

    #[cfg(test)]
    pub(crate) fn text<S: Into<String>, V: Into<String>>(mut self, name: S, value: V) -> Self {
        self.push(name, ParamValue::Text(value.into()));
        self
    }

    /// Serialize `value` into a JSON parameter
    pub fn json<S: Into<String>, T: Serialize>(
        mut self,
        name: S,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        self.push(name, ParamValue::Json(serde_json::to_value(value)?));
        Ok(self)
    }

    fn push<S: Into<String>>(&mut self, name: S, value: ParamValue) {
        self.params.push(ProcedureParam {
            name: name.into(),
            value,
        });
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.params.iter().find(|p| p.name == name).map(|p| &p.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcedureParam> {
        self.params.iter()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
