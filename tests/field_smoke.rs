use wave_field_engine::{FieldConfig, FieldCore, PointField};

#[test]
fn point_field_steps_and_exposes_frame() {
    let mut field = PointField::new(1280, 720);
    assert_eq!(field.point_count(), 2500);
    assert_eq!(field.drawn_count(), 0);

    field.pointer_move(640.0, 360.0);
    field.step();

    assert_eq!(field.frame(), 1);
    assert!((field.time() - 0.1).abs() < 1e-12);
    assert_eq!(field.yaw(), 0.0);
    assert_eq!(field.pitch(), 0.0);
    assert_eq!(field.frame_len(), field.drawn_count() * field.dot_stride());
    assert_eq!(field.frame_byte_len(), field.frame_len() * 4);
    assert!(!field.frame_ptr().is_null());
}

#[test]
fn resize_through_facade_keeps_clock() {
    let mut field = PointField::new(800, 600);
    for _ in 0..3 {
        field.step();
    }
    let time = field.time();
    field.resize(1024, 768);
    assert_eq!((field.width(), field.height()), (1024, 768));
    assert_eq!(field.time(), time);
}

#[test]
fn custom_config_changes_lattice_size() {
    let config = FieldConfig { rows: 10, cols: 12, ..FieldConfig::default() };
    let mut core = FieldCore::with_config(800, 600, config);
    core.step();
    assert_eq!(core.point_count(), 120);
    assert_eq!(core.drawn_count(), 120);
}
