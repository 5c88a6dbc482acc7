//! Reference aggregation.

use crate::registry::GlobalRegistry;
use crate::resolve::OwnerResolver;
use glint_analysis_common::ReferenceEvent;
use tracing::debug;

/// Counters for the reference pass.
pub(crate) struct AggregateStats {
    pub resolved: usize,
    pub dropped: usize,
}

/// Fold reference events into the registry's per-variable function sets.
///
/// Events whose target is not a tracked global contribute nothing, as do
/// events on lines outside every recorded span (a file-scope initializer,
/// for instance).
pub(crate) fn run(
    registry: &mut GlobalRegistry,
    resolver: &OwnerResolver<'_>,
    events: &[ReferenceEvent],
) -> AggregateStats {
    let mut stats = AggregateStats {
        resolved: 0,
        dropped: 0,
    };

    for event in events {
        if !registry.is_tracked(&event.target) {
            stats.dropped += 1;
            continue;
        }

        match resolver.resolve(event.line) {
            Some(owner) => {
                registry.add_reference(&event.target, owner);
                stats.resolved += 1;
            }
            None => {
                debug!(variable = %event.target, line = event.line, "reference outside any function span");
                stats.dropped += 1;
            }
        }
    }

    stats
}
