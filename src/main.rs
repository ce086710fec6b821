use std::f64::consts::FRAC_PI_2;

use dmath::core::prelude::*;
use dmath::{check, check_almost_eq, check_eq, check_err, check_lt};
use tracing_subscriber::fmt::time::OffsetTime;

fn main() -> Result<()> {
    setup_log();
    run_test_cases().context("self-check failed")?;
    info!("all checks passed");
    Ok(())
}

fn setup_log() {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_test_cases() -> Result<()> {
    check_vectors()?;
    info!("vectors: ok");
    check_matrices()?;
    info!("matrices: ok");
    check_rotations()?;
    info!("rotations: ok");
    Ok(())
}

fn check_vectors() -> Result<()> {
    let v = Vec3::new(3.0, 4.0, 0.0);
    check_eq!(v.len(), 5.0);
    check_eq!(v.normed(), Vec3::new(0.6, 0.8, 0.0));
    check_eq!(Vec3::zero().normed(), Vec3::zero());
    check_lt!((Vec3::new(-2.0, 7.0, 1.5).normed().len() - 1.0).abs(), EPSILON);

    let right = Vec2::new(1.0, 0.0);
    check_eq!(right.component(0), Ok(1.0));
    check_eq!(right.component(1), Ok(0.0));
    check_err!(right.component(2), LinalgError::IndexOutOfRange { index: 2, .. });

    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 0.5, 2.0);
    check_eq!(a.dot(b), b.dot(a));
    check_eq!(a.cross(b), -b.cross(a));
    check_eq!(a.dist(b), b.dist(a));
    check_eq!(a.lerp(b, 0.0), a);
    check_eq!(a.lerp(b, 1.0), b);
    let p = a.lerp(b, 0.3);
    check_lt!((a.dist(p) + p.dist(b) - a.dist(b)).abs(), EPSILON);

    let host = Vec4::new(0.5, -1.25, 1e6, 3.0).to_host();
    check_eq!(Vec4::from_host(host), Vec4::new(0.5, -1.25, 1e6, 3.0));
    check!(Vec3::new(1e300, 0.0, 0.0).to_host_checked().is_err());
    Ok(())
}

fn check_matrices() -> Result<()> {
    let identity = Mat4x4::identity();
    for i in 0..4 {
        check_eq!(identity[(i, i)], 1.0);
    }
    check_eq!(identity.determinant(), 1.0);
    check_eq!(identity.inverse(), identity);

    let m = Mat4x4::from_cols_array([
        4.0, 0.0, 1.0, 2.0, 7.0, 5.0, 0.0, 2.0, 2.0, 0.0, 3.0, 1.0, 3.0, 1.0, 0.0, 6.0,
    ]);
    check_eq!(m.determinant(), 240.0);
    check_almost_eq!(m * m.inverse(), identity);
    check_eq!(m.transpose().transpose(), m);

    check_eq!(
        Mat4x4::translate(Vec3::new(1.0, 2.0, 3.0)).multiply_point(Vec3::zero()),
        Vec3::new(1.0, 2.0, 3.0)
    );

    let mut swap = Mat4x4::zero();
    for (row, col) in [(0, 1), (1, 0), (2, 3), (3, 2)] {
        *swap.get_mut(row, col)? = 1.0;
    }
    check!(!swap.inverse().is_finite());
    check_eq!(swap.try_inverse()?, swap);
    check_err!(Mat4x4::zero().try_inverse(), LinalgError::SingularMatrix);
    check_err!(
        Mat4x4::look_at(Vec3::zero(), Vec3::forward(), Vec3::up()),
        LinalgError::UnsupportedOperation(_)
    );
    Ok(())
}

fn check_rotations() -> Result<()> {
    let mid = Vec3::right().slerp(Vec3::up(), 0.5);
    check_lt!((mid.len() - 1.0).abs(), EPSILON);
    check_lt!((mid.angle(Vec3::right()) - 45.0).abs(), EPSILON);
    check_lt!((mid.angle(Vec3::up()) - 45.0).abs(), EPSILON);
    check_almost_eq!(
        Vec3::right().rotate_towards(Vec3::up() * 3.0, FRAC_PI_2, 1.0),
        Vec3::up() * 2.0
    );

    let mut normal = Vec3::new(0.0, 0.0, 2.0);
    let mut tangent = Vec3::new(1.0, 0.0, 1.0);
    Vec3::ortho_normalize(&mut normal, &mut tangent);
    check_eq!(normal, Vec3::forward());
    check_eq!(tangent, Vec3::right());

    let pos = Vec3::new(1.0, 2.0, 3.0);
    let trs = Mat4x4::trs(pos, &AxisAngle::new(Vec3::up(), FRAC_PI_2), Vec3::one());
    check_almost_eq!(trs.multiply_point(Vec3::forward()), pos + Vec3::right());
    Ok(())
}
