use super::FieldCore;

pub(super) fn resize(field: &mut FieldCore, width: u32, height: u32) {
    field.width = width;
    field.height = height;
}
