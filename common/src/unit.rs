//! Marker types.

/// Marker type describing an entity creation.
#[derive(Clone, Copy, Debug)]
pub struct Creation;

/// Marker type describing an entity modification.
#[derive(Clone, Copy, Debug)]
pub struct Modification;

/// Marker type describing a finished delivery (sending or completion).
#[derive(Clone, Copy, Debug)]
pub struct Delivery;

/// Marker type describing a delivery planned for the future.
#[derive(Clone, Copy, Debug)]
pub struct Schedule;

/// Marker type describing the last activity of a user.
#[derive(Clone, Copy, Debug)]
pub struct Activity;
