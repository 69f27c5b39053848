use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

/// Integrates a dynamic body forward by `dt` using semi-implicit Euler.
///
/// Gravity is folded into the frame force first, scaled per axis by the body's
/// gravity scale. Static bodies do not move, but every body leaves with its force and
/// torque accumulators cleared.
pub fn integrate(body: &mut RigidBody, gravity: Vec2, dt: f64) {
    if !body.is_dynamic() {
        // Static object, do not integrate, but drop whatever was applied this frame
        body.clear_accumulators();
        return;
    }

    // --- Linear Motion --- //
    // Fold gravity into the frame force (F = F + g * gravity_scale, per axis)
    body.force += body.gravity_scale.hadamard(gravity);
    // Update linear velocity (v = v + F*m*dt)
    // The force is scaled by mass rather than divided by it. Hosts tune gravity_scale
    // and drag against this behaviour, so it stays.
    body.velocity += body.force * body.mass() * dt;
    // Apply linear drag (v = v * max(0, 1 - drag*dt))
    body.velocity *= drag_factor(body.material.linear_drag(), dt);
    // Zero the locked axes before they can move the body
    body.velocity = body.locks.mask(body.velocity);
    // Update position (p = p + v*dt)
    body.transform.position += body.velocity * dt;

    // --- Angular Motion --- //
    if body.locks.rotation {
        // Locked rotation keeps no spin at all
        body.angular_velocity = 0.0;
    } else {
        // Calculate angular acceleration (alpha = T/I), in radians per second squared
        let angular_acceleration = body.torque / body.moment_of_inertia();
        // Update angular velocity (omega = omega + alpha*dt), stored in degrees
        body.angular_velocity += angular_acceleration.to_degrees() * dt;
        // Apply angular drag the same way as linear drag
        body.angular_velocity *= drag_factor(body.material.angular_drag(), dt);
        // Update rotation (theta = theta + omega*dt), wrapped to [-180, 180]
        body.transform.rotation = wrap_degrees(body.transform.rotation + body.angular_velocity * dt);
    }

    // Clear force/torque accumulators for the next step
    body.clear_accumulators();
}

/// Multiplier applied to a velocity by `drag` over `dt`. Never negative, so drag
/// can stop a body but not reverse it.
fn drag_factor(drag: f64, dt: f64) -> f64 {
    (1.0 - drag * dt).max(0.0)
}

/// Wraps an angle in degrees to the range [-180, 180].
fn wrap_degrees(angle: f64) -> f64 {
    // atan2 of the angle's own sine and cosine lands back in [-PI, PI]
    let radians = angle.to_radians();
    radians.sin().atan2(radians.cos()).to_degrees()
}
