use alloc::collections::BTreeMap;

use ibc::apps::transfer::module::TransferModule;
use ibc::apps::transfer::types::{MODULE_ID_STR, PAYLOAD_ROUTE};
use ibc::core::primitives::prelude::*;
use ibc::core::router::module::Module;
use ibc::core::router::types::module::ModuleId;

use crate::testapp::ibc::core::types::MockIbcStore;

#[derive(Debug, Default)]
pub struct MockRouter {
    pub router: BTreeMap<ModuleId, Box<dyn Module<MockIbcStore>>>,

    /// Maps payload routes to the module that owns them
    pub route_to_module: BTreeMap<String, ModuleId>,
}

impl MockRouter {
    pub fn new_with_transfer() -> Self {
        let mut router = Self::default();

        let module_id = ModuleId::new(MODULE_ID_STR.to_string());

        router.scope_route_to_module(PAYLOAD_ROUTE, module_id.clone());

        router
            .add_route(module_id, TransferModule)
            .expect("Never fails");

        router
    }

    pub fn add_route(
        &mut self,
        module_id: ModuleId,
        module: impl Module<MockIbcStore> + 'static,
    ) -> Result<(), String> {
        match self.router.insert(module_id, Box::new(module)) {
            None => Ok(()),
            Some(_) => Err("Duplicate module_id".to_owned()),
        }
    }

    /// Binds `module` to `route`, replacing whatever module served it.
    pub fn replace_route(
        &mut self,
        route: &str,
        module_id: ModuleId,
        module: impl Module<MockIbcStore> + 'static,
    ) {
        if let Some(previous) = self.route_to_module.remove(route) {
            self.router.remove(&previous);
        }
        self.router.insert(module_id.clone(), Box::new(module));
        self.scope_route_to_module(route, module_id);
    }

    pub fn scope_route_to_module(&mut self, route: &str, module_id: ModuleId) {
        self.route_to_module.insert(route.to_string(), module_id);
    }
}
