use std::any::Any;
use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;
use std::sync::Arc;

/// Parsed constructor input for a component.
///
/// `Null` means "no explicit input" (the component falls back to its
/// defaults). String inputs may name a preset; object inputs may carry a
/// `$preset` discriminator key. See [`crate::options::resolve_options`].
pub type Input = serde_json::Value;

/// A live component instance, shared between the host that owns it and any
/// child components that hold it as their parent.
///
/// Instances are single-threaded by design: the whole engine runs
/// cooperatively inside the batch-processing pass.
pub type SharedComponent = Rc<RefCell<dyn Component>>;

/// Wrap a concrete component into a [`SharedComponent`] handle.
pub fn shared<C: Component>(component: C) -> SharedComponent {
    Rc::new(RefCell::new(component))
}

/// The capability surface the engine expects from every component instance.
///
/// Both lifecycle hooks are optional (default no-ops). The engine guarantees
/// `init` is called at most once, strictly after construction and only once
/// the whole subtree containing the instance's node has completed its
/// creation pass, and that `destroy` is called at most once, before the
/// instance's host entry is discarded.
pub trait Component: Any {
    /// Called once all sibling and descendant instances of the same creation
    /// pass have been constructed.
    fn init(&mut self) {}

    /// Called when the instance's node leaves the observed tree.
    fn destroy(&mut self) {}

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A registered component constructor.
///
/// Definitions may expose their own registry of child definitions via
/// [`child`](ComponentDefinition::child), which the engine's resolver walks
/// for multi-segment ids (`slider-slide-handle` resolves through
/// `Slider.child("slide").child("handle")`).
pub trait ComponentDefinition {
    /// Construct an instance for `node_id`.
    ///
    /// `parent` is the resolved instance of the declaration's parent
    /// component when the id declares a nested child, and `None` for
    /// root-level declarations. Errors are contained by the engine to the
    /// single declaration being processed.
    fn create(
        &self,
        node_id: usize,
        input: &Input,
        parent: Option<&SharedComponent>,
    ) -> Result<SharedComponent, Box<dyn Error>>;

    /// Look up a nested child definition by name.
    fn child(&self, name: &str) -> Option<Arc<dyn ComponentDefinition>> {
        let _ = name;
        None
    }
}
