use std::rc::Rc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use cairn::runtime::{
    func::{Arg, ImpBody},
    interp::{Interp, RuntimeError},
    types::TypeId,
    value::Value,
    vector::Vector,
};

fn nop(_interp: &mut Interp) -> Result<(), RuntimeError> {
    Ok(())
}

fn int_vect(len: usize) -> Rc<Vector> {
    Vector::from_values((0..len as i64).map(Value::Int).collect())
}

fn bench_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_resolution");

    const DECOYS: [TypeId; 4] = [TypeId::Str, TypeId::Vect, TypeId::Bool, TypeId::Quot];

    for overloads in [1usize, 4, 16] {
        let mut interp = Interp::new();
        let func = interp.add_func("bench", 2);
        // one matching overload plus N-1 non-matching decoys, all distinct
        func.borrow_mut().add_imp(
            vec![Arg::Type(TypeId::Int), Arg::Type(TypeId::Int)],
            ImpBody::Native(nop),
        );
        for i in 1..overloads {
            let specs = vec![
                Arg::Type(DECOYS[i % DECOYS.len()]),
                Arg::Type(DECOYS[(i / DECOYS.len()) % DECOYS.len()]),
            ];
            func.borrow_mut().add_imp(specs, ImpBody::Native(nop));
        }

        interp.stack.push(Value::Int(1));
        interp.stack.push(Value::Int(2));

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(overloads),
            &overloads,
            |b, _| {
                b.iter(|| black_box(func.borrow().get_imp(&interp.stack)));
            },
        );
    }

    group.finish();
}

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_add_one");

    for len in [16usize, 256] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut interp = Interp::new();
            let map = interp.func("map").unwrap();
            let add_one = Value::Quot(Rc::new(vec![
                Value::Int(1),
                Value::Func(interp.func("+").unwrap()),
            ]));

            b.iter(|| {
                interp.stack.push(Value::Vect(int_vect(len)));
                interp.stack.push(add_one.share());
                interp.call_func(&map).unwrap();
                black_box(interp.stack.pop());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolution, bench_map);
criterion_main!(benches);
