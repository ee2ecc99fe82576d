//! Tool trait and name-keyed registry for dynamic dispatch.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::future::BoxFuture;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ToolError;

/// A tool callable with typed input, producing text.
pub trait Tool: Send + Sync + 'static {
    /// Argument type, decoded from the JSON arguments object.
    type Input: DeserializeOwned + JsonSchema + Send + 'static;

    /// Unique name identifying the tool.
    const NAME: &'static str;

    /// Human-readable description of what the tool does.
    const DESCRIPTION: &'static str;

    /// Execute the tool.
    fn call(&self, input: Self::Input) -> BoxFuture<'static, Result<String, ToolError>>;
}

/// Type-erased tool for dynamic dispatch.
pub trait ErasedTool: Send + Sync {
    /// The tool's name.
    fn name(&self) -> &'static str;

    /// The tool's description.
    fn description(&self) -> &'static str;

    /// Input JSON schema as an object.
    fn input_schema(&self) -> Map<String, Value>;

    /// Call the tool with JSON arguments.
    fn call_json(&self, args: Value) -> BoxFuture<'static, Result<String, ToolError>>;
}

struct Erased<T: Tool>(T);

impl<T: Tool> ErasedTool for Erased<T> {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn description(&self) -> &'static str {
        T::DESCRIPTION
    }

    fn input_schema(&self) -> Map<String, Value> {
        match serde_json::to_value(schemars::schema_for!(T::Input)) {
            Ok(Value::Object(map)) => map,
            _ => {
                let mut map = Map::new();
                map.insert("type".into(), Value::String("object".into()));
                map
            }
        }
    }

    fn call_json(&self, args: Value) -> BoxFuture<'static, Result<String, ToolError>> {
        match serde_json::from_value::<T::Input>(args) {
            Ok(input) => self.0.call(input),
            Err(e) => Box::pin(async move { Err(ToolError::invalid_params(e)) }),
        }
    }
}

/// Registry of tools keyed by name.
#[derive(Default)]
pub struct ToolRegistry {
    map: BTreeMap<&'static str, Arc<dyn ErasedTool>>,
}

impl ToolRegistry {
    /// Create a new registry builder.
    #[must_use]
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::default()
    }

    /// Tool names in sorted order.
    pub fn list_names(&self) -> Vec<&'static str> {
        self.map.keys().copied().collect()
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ErasedTool>> {
        self.map.get(name)
    }

    /// Check if a tool is registered by name.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Dispatch a call using JSON arguments.
    ///
    /// # Errors
    /// Unknown tools and undecodable arguments are `InvalidParams`; otherwise
    /// the tool's own error is returned.
    pub async fn dispatch_json(&self, name: &str, args: Value) -> Result<String, ToolError> {
        let entry = self
            .map
            .get(name)
            .ok_or_else(|| ToolError::invalid_params(format!("Unknown tool: {name}")))?;
        entry.call_json(args).await
    }
}

/// Builder for constructing a [`ToolRegistry`].
#[derive(Default)]
pub struct ToolRegistryBuilder {
    map: BTreeMap<&'static str, Arc<dyn ErasedTool>>,
}

impl ToolRegistryBuilder {
    /// Register a tool. A later tool with the same name replaces an earlier one.
    #[must_use]
    pub fn register<T: Tool>(mut self, tool: T) -> Self {
        self.map.insert(T::NAME, Arc::new(Erased(tool)));
        self
    }

    /// Build the registry.
    #[must_use]
    pub fn finish(self) -> ToolRegistry {
        ToolRegistry { map: self.map }
    }
}
