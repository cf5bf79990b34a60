//! In-memory host for the opcode protocol.
//!
//! The host owns named surfaces (the equivalent of `<div id="root">`), mounts a
//! root component into one, and routes events back to the component instance
//! that rendered the bound element. Only the instance that handled an event is
//! re-rendered; its parent and siblings keep their last render.

mod document;
mod html;
mod registry;

use std::collections::BTreeMap;

use slotmap::SlotMap;

pub use document::{Element, InstanceId, Node};
pub use html::to_html;
pub use registry::ComponentRegistry;

use crate::components::Component;
use crate::error::{HostError, Result};
use crate::Opcode;
use document::{take_components, validate};

const ROOT_NAME: &str = "root";

struct Instance {
    name: String,
    surface: String,
    component: Box<dyn Component>,
    renders: usize,
}

pub struct Host {
    registry: ComponentRegistry,
    surfaces: BTreeMap<String, Option<Node>>,
    instances: SlotMap<InstanceId, Instance>,
}

impl Host {
    pub fn new(registry: ComponentRegistry) -> Self {
        Self {
            registry,
            surfaces: BTreeMap::new(),
            instances: SlotMap::with_key(),
        }
    }

    /// A host with the default registry and a single empty surface.
    pub fn page(surface_id: &str) -> Self {
        let mut host = Self::new(ComponentRegistry::default());
        host.add_surface(surface_id);
        host
    }

    pub fn add_surface(&mut self, surface_id: impl Into<String>) {
        self.surfaces.entry(surface_id.into()).or_insert(None);
    }

    pub fn registry_mut(&mut self) -> &mut ComponentRegistry {
        &mut self.registry
    }

    /// Renders `root` and every child it references into an empty surface.
    pub fn mount<C>(&mut self, surface_id: &str, root: C) -> Result<InstanceId>
    where
        C: Component + 'static,
    {
        match self.surfaces.get(surface_id) {
            None => return Err(HostError::UnknownSurface(surface_id.to_string())),
            Some(Some(_)) => return Err(HostError::AlreadyMounted(surface_id.to_string())),
            Some(None) => {}
        }

        let mut created = Vec::new();
        let tree = match self.instantiate(ROOT_NAME, Box::new(root), surface_id, &mut created) {
            Ok(tree) => tree,
            Err(err) => {
                self.discard(&created);
                tracing::warn!(surface = surface_id, error = %err, "mount failed");
                return Err(err);
            }
        };

        self.surfaces.insert(surface_id.to_string(), Some(tree));
        tracing::info!(
            surface = surface_id,
            instances = created.len(),
            "mounted root component"
        );
        Ok(created[0])
    }

    /// Drops the tree on `surface_id` and every instance in it. Returns
    /// `false` if nothing was mounted.
    pub fn unmount(&mut self, surface_id: &str) -> Result<bool> {
        let slot = self
            .surfaces
            .get_mut(surface_id)
            .ok_or_else(|| HostError::UnknownSurface(surface_id.to_string()))?;
        let Some(tree) = slot.take() else {
            return Ok(false);
        };

        let mut ids = Vec::new();
        tree.instances(&mut ids);
        self.discard(&ids);
        tracing::info!(surface = surface_id, instances = ids.len(), "unmounted");
        Ok(true)
    }

    /// Delivers `handler` to an instance and re-renders it if its state changed.
    pub fn dispatch(&mut self, id: InstanceId, handler: &str) -> Result<bool> {
        let instance = self.instance_mut(id)?;
        let changed = instance.component.handle_event(handler);
        tracing::debug!(
            instance = ?id,
            component = %instance.name,
            handler,
            changed,
            "dispatched event"
        );
        if changed {
            self.rerender(id)?;
        }
        Ok(changed)
    }

    /// Finds the first element on the surface bound to `event_type` with
    /// `handler` and dispatches to the component that rendered it.
    pub fn fire(&mut self, surface_id: &str, event_type: &str, handler: &str) -> Result<bool> {
        let tree = self
            .surfaces
            .get(surface_id)
            .ok_or_else(|| HostError::UnknownSurface(surface_id.to_string()))?;
        let target = tree
            .as_ref()
            .and_then(|root| root.find_handler(None, event_type, handler))
            .ok_or_else(|| HostError::NoEventTarget {
                surface: surface_id.to_string(),
                event_type: event_type.to_string(),
                handler: handler.to_string(),
            })?;
        self.dispatch(target, handler)
    }

    pub fn click(&mut self, surface_id: &str, handler: &str) -> Result<bool> {
        self.fire(surface_id, "click", handler)
    }

    pub fn surface(&self, surface_id: &str) -> Option<&Node> {
        self.surfaces.get(surface_id).and_then(Option::as_ref)
    }

    /// HTML of the surface contents; empty if nothing is mounted.
    pub fn html(&self, surface_id: &str) -> Result<String> {
        let tree = self
            .surfaces
            .get(surface_id)
            .ok_or_else(|| HostError::UnknownSurface(surface_id.to_string()))?;
        Ok(tree.as_ref().map(to_html).unwrap_or_default())
    }

    /// How many times an instance has rendered, counting its first render.
    pub fn render_count(&self, id: InstanceId) -> Result<usize> {
        self.instance(id).map(|instance| instance.renders)
    }

    /// Live instances registered under `name`.
    pub fn instances_named(&self, name: &str) -> Vec<InstanceId> {
        self.instances
            .iter()
            .filter(|(_, instance)| instance.name == name)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn is_live(&self, id: InstanceId) -> bool {
        self.instances.contains_key(id)
    }

    /// Number of live instances across all surfaces.
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    fn instance(&self, id: InstanceId) -> Result<&Instance> {
        self.instances.get(id).ok_or(HostError::UnknownInstance(id))
    }

    fn instance_mut(&mut self, id: InstanceId) -> Result<&mut Instance> {
        self.instances
            .get_mut(id)
            .ok_or(HostError::UnknownInstance(id))
    }

    fn discard(&mut self, ids: &[InstanceId]) {
        for id in ids {
            self.instances.remove(*id);
        }
    }

    /// Mounts a component and its children. Every instance made along the way
    /// is recorded in `created`, outermost first, so a failure can be undone.
    fn instantiate(
        &mut self,
        name: &str,
        component: Box<dyn Component>,
        surface: &str,
        created: &mut Vec<InstanceId>,
    ) -> Result<Node> {
        let ops = component.render();
        let id = self.instances.insert(Instance {
            name: name.to_string(),
            surface: surface.to_string(),
            component,
            renders: 1,
        });
        created.push(id);
        tracing::trace!(instance = ?id, component = name, opcodes = ops.len(), "rendered");

        let children = self.build_children(ops, surface, &mut Vec::new(), created)?;
        Ok(Node::Component {
            instance: id,
            children,
        })
    }

    /// Builds nodes for `ops`. A `Child` takes over the first entry of
    /// `reusable` with the same component name before a new instance is made.
    fn build_children(
        &mut self,
        ops: Vec<Opcode>,
        surface: &str,
        reusable: &mut Vec<(InstanceId, Vec<Node>)>,
        created: &mut Vec<InstanceId>,
    ) -> Result<Vec<Node>> {
        validate(&ops)?;
        document::build(ops, |name| {
            let kept = reusable.iter().position(|(id, _)| {
                self.instance(*id).is_ok_and(|instance| instance.name == name)
            });
            if let Some(pos) = kept {
                let (instance, children) = reusable.remove(pos);
                return Ok(Node::Component { instance, children });
            }
            let component = self.registry.create(name)?;
            self.instantiate(name, component, surface, created)
        })
    }

    /// Replaces an instance's subtree with a fresh render. On failure the old
    /// subtree stays in place and any instances made for the new one are dropped.
    fn rerender(&mut self, id: InstanceId) -> Result<()> {
        let (ops, surface) = {
            let instance = self.instance(id)?;
            (instance.component.render(), instance.surface.clone())
        };

        let mut reusable = Vec::new();
        take_components(self.subtree_mut(&surface, id)?.clone(), &mut reusable);

        let mut created = Vec::new();
        let children = match self.build_children(ops, &surface, &mut reusable, &mut created) {
            Ok(children) => children,
            Err(err) => {
                self.discard(&created);
                tracing::warn!(instance = ?id, error = %err, "re-render failed, kept previous tree");
                return Err(err);
            }
        };

        for (stale, subtree) in reusable {
            let mut dropped = vec![stale];
            for node in &subtree {
                node.instances(&mut dropped);
            }
            self.discard(&dropped);
        }

        *self.subtree_mut(&surface, id)? = children;
        self.instance_mut(id)?.renders += 1;
        tracing::debug!(instance = ?id, surface = %surface, "re-rendered");
        Ok(())
    }

    fn subtree_mut(&mut self, surface: &str, id: InstanceId) -> Result<&mut Vec<Node>> {
        self.surfaces
            .get_mut(surface)
            .and_then(Option::as_mut)
            .and_then(|root| root.component_children_mut(id))
            .ok_or(HostError::UnknownInstance(id))
    }
}
