//! Peer channel abstraction
//!
//! This module defines the trait the duel orchestrator uses to talk to its
//! single peer. The channel abstraction keeps the core independent of the
//! actual point-to-point provider: the provider owns connection setup, NAT
//! traversal, retries and ordering, and surfaces its "open", "data" and
//! failure events to the caller, who forwards them into [`crate::duel::Duel`].

use crate::protocol::DuelMessage;

/// Trait for sending duel messages to the connected peer
///
/// Implementations wrap whatever data channel the external peer transport
/// provides. The protocol relies on the transport delivering messages from
/// one sender in send order; it performs no sequencing of its own.
pub trait Channel {
    /// Sends a message to the peer
    ///
    /// Delivery is fire-and-forget: loss or closure is not detected here,
    /// the peer simply stops receiving updates.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to send
    fn send(&self, message: &DuelMessage);

    /// Closes the channel
    ///
    /// Called when the local participant returns to the menu and the
    /// session is torn down. Closing is idempotent on the provider side.
    fn close(self);
}
