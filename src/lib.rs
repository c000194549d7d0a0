pub mod configuration;

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod point2d;
        pub mod polynomialdegree;
        pub mod polynomialcurve;
    }
    pub mod interval;
}

pub mod sampler {
    pub mod samplererror;
    pub mod dataset;
    pub mod curvesampler;
}
