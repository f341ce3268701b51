/// Mutable 4D vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector4 {
    components: [f64; 4],
}

/// Immutable 4D vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImmutableVector4 {
    components: [f64; 4],
}

vector_type!(mut Vector4, 4, [x = 0, y = 1, z = 2, w = 3]);
vector_type!(ImmutableVector4, 4, [x = 0, y = 1, z = 2, w = 3]);
mutable_vector!(Vector4, 4, [set_x = 0, set_y = 1, set_z = 2, set_w = 3]);
vector_flavors!(Vector4, ImmutableVector4);
