use tokio::sync::RwLock;

use sftpwatch_common::Instance;

/// In-memory registry of service instances known to this management
/// interface. Handlers take read guards; registration takes the write guard.
#[derive(Default)]
pub struct InstanceRegistry {
    instances: RwLock<Vec<Instance>>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an instance, replacing any existing entry with the same name.
    pub async fn register(&self, instance: Instance) {
        let mut instances = self.instances.write().await;
        instances.retain(|i| i.instance_name != instance.instance_name);
        instances.push(instance);
    }

    pub async fn all(&self) -> Vec<Instance> {
        self.instances.read().await.clone()
    }
}
