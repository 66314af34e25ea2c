use slotmap::new_key_type;

new_key_type! {
    /// Opaque handle for an object stored in the registry arena. Handles are
    /// generational: once an object is destroyed its handle never resolves
    /// again, even if the slot is reused.
    pub struct ObjectId;
}
