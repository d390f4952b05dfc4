use crate::graph::node::{GraphNode, RenderCtx};

/*
Serial Signal Chain (Through)
=============================

Through connects two nodes in series: the source renders into the buffer,
then the effect processes that buffer in place.

  Source renders:  [0.5, 0.8, -0.3, 0.9, ...]
  Filter in place: [0.1, 0.3,  0.2, 0.4, ...]

The usual patch here is an oscillator feeding the SSM2044:

  let voice = OscNode::sawtooth()
      .through(Ssm2044Node::new(800.0, 1.5));

Resets are forwarded to both sides.
*/

pub struct Through<S, F> {
    source: S,
    filter: F,
}

impl<S, F> Through<S, F> {
    pub fn new(source: S, filter: F) -> Self {
        Self { source, filter }
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut F {
        &mut self.filter
    }
}

impl<S: GraphNode, F: GraphNode> GraphNode for Through<S, F> {
    fn render_block(&mut self, out: &mut [f64], ctx: &RenderCtx) {
        self.source.render_block(out, ctx);
        self.filter.render_block(out, ctx);
    }

    fn reset(&mut self) {
        self.source.reset();
        self.filter.reset();
    }
}
