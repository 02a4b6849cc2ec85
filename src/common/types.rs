pub type Scaler = f32;
