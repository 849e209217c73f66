use wave_field_engine::PointField;

#[test]
fn perf_smoke_step() {
    let mut field = PointField::new(1280, 720);
    field.enable_perf_metrics(true);
    field.pointer_move(1000.0, 200.0);
    for _ in 0..60 {
        field.step();
    }
    let stats = field.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.points_processed(), 2500);
    assert_eq!(stats.frame(), 60);
}
