use crate::candle::components::Candle;
use crate::scene::ObjectSink;

/// Operations scripts may call on a candle.
pub trait CandleApi {
    fn get_burning(&self) -> bool;
    fn set_burning(&mut self, burning: bool);
}

/// Binds a candle to the scene its smoke goes into, for the duration of a
/// script call.
pub struct ScriptedCandle<'a, S: ObjectSink + ?Sized> {
    candle: &'a mut Candle,
    scene: &'a mut S,
}

impl<'a, S: ObjectSink + ?Sized> ScriptedCandle<'a, S> {
    pub fn new(candle: &'a mut Candle, scene: &'a mut S) -> Self {
        Self { candle, scene }
    }
}

impl<S: ObjectSink + ?Sized> CandleApi for ScriptedCandle<'_, S> {
    fn get_burning(&self) -> bool {
        self.candle.burning()
    }

    fn set_burning(&mut self, burning: bool) {
        self.candle.set_burning(burning, &mut *self.scene);
    }
}
