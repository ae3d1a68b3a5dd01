//! Defines the `Router`, which binds modules to payload routes

use ibc_core_router_types::module::ModuleId;

use crate::module::Module;

/// Router as defined in ICS-26, which binds modules to the routes carried
/// by payloads.
pub trait Router<Ctx> {
    /// Returns a reference to a `Module` registered against the specified `ModuleId`
    fn get_route(&self, module_id: &ModuleId) -> Option<&dyn Module<Ctx>>;

    /// Returns a mutable reference to a `Module` registered against the specified `ModuleId`
    fn get_route_mut(&mut self, module_id: &ModuleId) -> Option<&mut dyn Module<Ctx>>;

    /// Return the module_id associated with a given payload route
    fn lookup_module(&self, route: &str) -> Option<ModuleId>;
}
