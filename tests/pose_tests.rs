use reptile::{
    Chain, ChainConfig, InputState, NoOpStepObserver, PoseProjector, Segment, SegmentShape,
    SolverConfig, Vec2,
};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

fn moving_chain(steps: usize) -> Chain<f64> {
    let mut chain = Chain::new(Vec2::new(400.0, 300.0), &ChainConfig::default()).unwrap();
    let input = InputState::new(Vec2::new(520.0, 180.0));
    let config = SolverConfig::new();
    for _ in 0..steps {
        chain.step(&input, &config, &mut NoOpStepObserver);
    }
    chain
}

fn close(a: Vec2<f64>, b: Vec2<f64>) -> bool {
    a.distance(b) < 1e-9
}

#[test]
fn projection_is_idempotent() {
    let chain = moving_chain(12);
    let projector = PoseProjector::default();

    let first = projector.project(&chain);
    let second = projector.project(&chain);

    assert_eq!(first, second);
}

#[test]
fn poses_run_tail_to_head() {
    let chain = moving_chain(5);
    let poses = PoseProjector::default().project(&chain);

    assert_eq!(poses.len(), chain.len());
    let indices: Vec<usize> = poses.iter().map(|p| p.index).collect();
    let expected: Vec<usize> = (0..chain.len()).rev().collect();
    assert_eq!(indices, expected);
    assert!(poses.last().unwrap().is_head());
}

#[test]
fn body_links_each_segment_to_its_leader() {
    let chain = moving_chain(8);
    let poses = PoseProjector::default().project(&chain);

    for pose in poses.iter().filter(|p| !p.is_head()) {
        assert_eq!(pose.body.from, chain.segment(pose.index).pos);
        assert_eq!(pose.body.to, chain.segment(pose.index - 1).pos);
        assert_eq!(pose.width, chain.segment(pose.index).width);
    }
}

#[test]
fn head_cap_projects_forward_along_heading() {
    let chain = moving_chain(3);
    let head_pose = PoseProjector::default().project(&chain).pop().unwrap();
    let head = chain.head();

    assert!(head_pose.spine.is_none());
    assert!((head_pose.body.length() - 10.0).abs() < 1e-9);
    let expected = head.pos + Vec2::from_angle(head.heading()).scale(10.0);
    assert!(close(head_pose.body.to, expected));
}

#[test]
fn spine_tick_is_perpendicular_at_midpoint() {
    let chain = moving_chain(20);
    let poses = PoseProjector::default().project(&chain);

    for pose in poses.iter().filter(|p| !p.is_head()) {
        let spine = pose.spine.expect("non-head segments carry a spine tick");
        let link = pose.body.to - pose.body.from;
        let tick = spine.to - spine.from;

        assert!((spine.length() - 8.0).abs() < 1e-9);
        assert!(close(spine.midpoint(), pose.body.midpoint()));
        assert!(link.dot(tick).abs() < 1e-6 * link.length().max(1.0));
    }
}

#[test]
fn legs_change_with_phase_and_skip_odd_segments() {
    let projector = PoseProjector::default();
    let shape = SegmentShape::default();

    let mut even = Segment::new(Vec2::new(100.0, 100.0), 2, 30, &shape, 0.25);
    let odd = Segment::new(Vec2::new(100.0, 100.0), 3, 30, &shape, 0.25);

    let before = projector.project_segment(&even, None).legs.unwrap();
    even.leg_phase = 1.2;
    let after = projector.project_segment(&even, None).legs.unwrap();

    assert!(!close(before.left.tip, after.left.tip));
    assert!(!close(before.right.tip, after.right.tip));
    assert!(projector.project_segment(&odd, None).legs.is_none());
}

#[test]
fn leg_geometry_follows_phase_formula() {
    let projector = PoseProjector::default();
    let mut s = Segment::new(Vec2::new(0.0, 0.0), 0, 30, &SegmentShape::default(), 0.25);
    s.leg_phase = 0.7;

    let legs = projector.project_segment(&s, None).legs.unwrap();

    // at rest the heading is 0
    let left_angle = FRAC_PI_2 + 0.7f64.sin() * 0.5;
    let right_angle = -FRAC_PI_2 + (0.7f64 + std::f64::consts::PI).sin() * 0.5;
    assert!((legs.left.angle - left_angle).abs() < 1e-12);
    assert!((legs.right.angle - right_angle).abs() < 1e-12);
    assert!(close(legs.left.tip, Vec2::from_angle(left_angle).scale(14.0)));
    assert!(close(legs.right.tip, Vec2::from_angle(right_angle).scale(14.0)));
    assert_eq!(legs.left.root, s.pos);
}

#[test]
fn leg_tips_carry_barbs() {
    let projector = PoseProjector::default();
    let s: Segment<f64> = Segment::new(Vec2::new(50.0, 50.0), 4, 30, &SegmentShape::default(), 0.25);
    let legs = projector.project_segment(&s, None).legs.unwrap();

    for leg in [legs.left, legs.right] {
        for (barb, offset) in leg.barbs.iter().zip([-FRAC_PI_4, FRAC_PI_4]) {
            assert_eq!(barb.from, leg.tip);
            assert!((barb.length() - 3.0).abs() < 1e-9);
            let expected = leg.tip - Vec2::from_angle(leg.angle + offset).scale(3.0);
            assert!(close(barb.to, expected));
        }
        // barbs point back toward the root
        assert!(leg.barbs[0].to.distance(leg.root) < leg.tip.distance(leg.root));
    }
}

#[test]
fn project_into_reuses_buffer() {
    let chain = moving_chain(4);
    let projector = PoseProjector::default();
    let mut buffer = projector.project(&chain);
    let capacity = buffer.capacity();

    projector.project_into(&chain, &mut buffer);

    assert_eq!(buffer.len(), chain.len());
    assert_eq!(buffer.capacity(), capacity);
    assert_eq!(buffer, projector.project(&chain));
}

#[test]
fn collapsed_chain_projects_finite_geometry() {
    let chain: Chain<f64> = Chain::new(Vec2::new(10.0, 10.0), &ChainConfig::default()).unwrap();
    for pose in PoseProjector::default().project(&chain) {
        assert!(pose.heading.is_finite());
        assert!(pose.body.to.is_finite());
        if let Some(legs) = pose.legs {
            assert!(legs.left.tip.is_finite() && legs.right.tip.is_finite());
        }
    }
}

#[test]
fn custom_projector_and_shape_change_geometry() {
    let shape = SegmentShape {
        base_width: 6.0,
        width_taper: 0.1,
        base_leg_length: 10.0,
        leg_taper: 0.5,
    };
    let mut chain: Chain<f64> = Chain::new(
        Vec2::new(400.0, 300.0),
        &ChainConfig::default().with_shape(shape),
    )
    .unwrap();
    let input = InputState::new(Vec2::new(520.0, 180.0));
    for _ in 0..10 {
        chain.step(&input, &SolverConfig::new(), &mut NoOpStepObserver);
    }
    let projector = PoseProjector::default()
        .with_head_length(20.0)
        .with_spine_half_length(2.0)
        .with_leg_swing(0.25)
        .with_arrow_size(5.0);

    let poses = projector.project(&chain);

    let head = chain.head();
    let head_pose = poses.last().unwrap();
    assert!((head_pose.width - 9.0).abs() < 1e-12);
    assert!((head_pose.body.length() - 20.0).abs() < 1e-9);

    let legs = head_pose.legs.unwrap();
    let left_angle = head.heading() + FRAC_PI_2 + head.leg_phase.sin() * 0.25;
    assert!((legs.left.angle - left_angle).abs() < 1e-12);
    for leg in [legs.left, legs.right] {
        assert!((leg.tip.distance(leg.root) - 25.0).abs() < 1e-9);
        for barb in leg.barbs.iter() {
            assert!((barb.length() - 5.0).abs() < 1e-9);
        }
    }

    for pose in poses.iter().filter(|p| !p.is_head()) {
        assert!((pose.spine.unwrap().length() - 4.0).abs() < 1e-9);
    }
}
