//! The two phases of a simulation step: integration and relaxation.

use crate::config::CurtainConfig;
use crate::float::Float;
use crate::mesh::Mesh;
use crate::observer::StepObserver;
use crate::pointer::PointerState;

/// Advance every particle by one Verlet step.
///
/// Per free particle: infer velocity from the position pair, damp it by a
/// fixed fraction, add `gravity * dt^2` (an acceleration accumulated as
/// displacement over one step), add the pointer drag when the particle is
/// inside the pointer field, then commit. Pinned particles snap back to
/// their previous position instead.
pub fn integrate<F: Float>(
    mesh: &mut Mesh<F>,
    pointer: &PointerState<F>,
    config: &CurtainConfig<F>,
    dt: F,
) {
    let keep = F::one() - config.damping;
    let fall = config.gravity * dt * dt;
    let drag = pointer.displacement().scale(config.mouse_force);

    for p in mesh.particles.iter_mut() {
        if p.pinned {
            p.hold();
            continue;
        }

        let mut velocity = p.velocity().scale(keep);
        velocity.y = velocity.y + fall;

        if pointer.active {
            let dist = p.pos.distance(pointer.pos);
            if dist < config.mouse_radius {
                // Linear falloff: full drag at the pointer, zero at the
                // field's edge.
                let falloff = F::one() - dist / config.mouse_radius;
                velocity = velocity + drag.scale(falloff);
            }
        }

        p.advance(velocity);
    }
}

/// Run `iterations` relaxation passes over all sticks, in construction
/// order. This is Gauss-Seidel style: each correction sees the positions
/// the previous one produced. The fixed count is a stiffness/CPU tradeoff;
/// leftover stretch is what makes the cloth look elastic.
pub fn satisfy<F: Float, O: StepObserver>(mesh: &mut Mesh<F>, iterations: usize, observer: &mut O) {
    for i in 0..iterations {
        for stick in mesh.sticks.iter() {
            stick.solve(&mut mesh.particles);
        }
        observer.on_relax_iteration(i);
    }
}
