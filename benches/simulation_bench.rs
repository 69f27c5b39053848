use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rigid2d::{PhysicsWorld, Vec2};

fn add_floor(world: &mut PhysicsWorld) {
    let floor = world.create_static_body(1.0).unwrap();
    let collider = world
        .create_aabb_collider(Vec2::ZERO, Vec2::new(50.0, 0.5), false)
        .unwrap();
    world.attach(floor, collider).unwrap();
    world.body_mut(floor).unwrap().transform.position = Vec2::new(0.0, -0.5);
}

// --- Helper for creating stack benchmarks ---
fn run_disc_stack_bench(world: &mut PhysicsWorld, num_discs: usize) {
    let radius = 0.5;
    for i in 0..num_discs {
        let y_pos = radius + (i as f64 * (radius * 2.1)); // Stack with slight gap
        let body = world.create_body(1.0).unwrap();
        let collider = world.create_disc_collider(Vec2::ZERO, radius, false).unwrap();
        world.attach(body, collider).unwrap();
        world.body_mut(body).unwrap().transform.position = Vec2::new(0.0, y_pos);
    }

    let dt = 1.0 / 60.0;
    for _ in 0..30 {
        world.step(black_box(dt));
    }
}

// --- Helper for a pile of rotated rounded boxes with one trigger over it ---
fn run_rounded_box_pile_bench(world: &mut PhysicsWorld, num_boxes: usize) {
    let sensor = world
        .create_aabb_collider(Vec2::new(0.0, 2.0), Vec2::new(10.0, 2.0), true)
        .unwrap();
    world.collider_mut(sensor).unwrap().events.stay = Some("in_zone".to_string());

    for i in 0..num_boxes {
        let body = world.create_body(1.0).unwrap();
        let collider = world
            .create_rounded_box_collider(Vec2::ZERO, Vec2::RIGHT, Vec2::new(0.4, 0.2), 0.05, false)
            .unwrap();
        world.attach(body, collider).unwrap();
        let body = world.body_mut(body).unwrap();
        body.transform.position = Vec2::new((i % 10) as f64 - 5.0, 1.0 + (i / 10) as f64);
        body.transform.rotation = (i * 17 % 90) as f64;
    }

    let dt = 1.0 / 60.0;
    for _ in 0..30 {
        world.step(black_box(dt));
    }
}

fn bench_disc_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("disc_stack");

    for num_discs in [10, 50, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_discs), num_discs, |b, &n| {
            b.iter(|| {
                let mut world = PhysicsWorld::new();
                add_floor(&mut world);
                run_disc_stack_bench(&mut world, black_box(n));
            });
        });
    }
    group.finish();
}

fn bench_rounded_box_pile(c: &mut Criterion) {
    let mut group = c.benchmark_group("rounded_box_pile");

    for num_boxes in [10, 50, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_boxes), num_boxes, |b, &n| {
            b.iter(|| {
                let mut world = PhysicsWorld::new();
                add_floor(&mut world);
                run_rounded_box_pile_bench(&mut world, black_box(n));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_disc_stack, bench_rounded_box_pile);
criterion_main!(benches);
