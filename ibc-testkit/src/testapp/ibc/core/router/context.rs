use ibc::core::router::module::Module;
use ibc::core::router::router::Router;
use ibc::core::router::types::module::ModuleId;

use super::types::MockRouter;
use crate::testapp::ibc::core::types::MockIbcStore;

impl Router<MockIbcStore> for MockRouter {
    fn get_route(&self, module_id: &ModuleId) -> Option<&dyn Module<MockIbcStore>> {
        self.router.get(module_id).map(AsRef::as_ref)
    }

    fn get_route_mut(&mut self, module_id: &ModuleId) -> Option<&mut dyn Module<MockIbcStore>> {
        // Mapping with `Box::as_mut` would pin the trait object to `'static`.
        match self.router.get_mut(module_id) {
            Some(module) => Some(module.as_mut()),
            None => None,
        }
    }

    fn lookup_module(&self, route: &str) -> Option<ModuleId> {
        self.route_to_module.get(route).cloned()
    }
}
