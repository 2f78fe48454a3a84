//! Depth-first label-correcting relaxation.
//!
//! Each stack frame is a node plus the position of the next neighbour to try.
//! A node is re-entered every time its cost drops, and the current node's cost
//! is read afresh for each neighbour, matching a recursive descent exactly
//! without being bounded by the call stack.

use super::{RelaxationObserver, Relaxer};

pub(super) fn run<O>(relaxer: &mut Relaxer<'_, O>, source: usize)
where
    O: RelaxationObserver + ?Sized,
{
    let mut stack: Vec<(usize, usize)> = vec![(source, 0)];
    relaxer.record_visit();

    while let Some(frame) = stack.last_mut() {
        let (node, slot) = *frame;
        let Some(neighbour) = relaxer.graph().neighbour_at(node, slot) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;

        if relaxer.relax(node, neighbour).is_some() {
            relaxer.record_visit();
            stack.push((neighbour, 0));
        }
    }
}
