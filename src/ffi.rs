use libc::{c_int, c_longlong, size_t};

use crate::algorithm::shortest_path;
use crate::graph::directed::{DirectedGraph, GraphBuilder};
use crate::graph::Edge;

/// Collects edges until the first query, then holds the frozen graph
pub struct FfiGraph {
    builder: Option<GraphBuilder>,
    graph: Option<DirectedGraph>,
}

#[repr(C)]
pub struct SptPath {
    /// Shortest distance, or -1 if `end` is unreachable
    pub distance: c_longlong,
    pub vertices: *mut size_t,
    pub len: size_t,
}

/// Returns null if `vertex_count` is zero
#[no_mangle]
pub extern "C" fn spt_graph_new(vertex_count: size_t) -> *mut FfiGraph {
    match GraphBuilder::new(vertex_count) {
        Ok(builder) => Box::into_raw(Box::new(FfiGraph {
            builder: Some(builder),
            graph: None,
        })),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Returns 0 on success, -1 for a bad edge or a graph that was already queried
#[no_mangle]
pub extern "C" fn spt_graph_add_edge(
    g: *mut FfiGraph,
    from: size_t,
    to: size_t,
    weight: u32,
) -> c_int {
    if g.is_null() {
        return -1;
    }
    match unsafe { &mut *g }.builder.as_mut() {
        Some(builder) => match builder.add_edge(Edge::new(from, to, weight)) {
            Ok(()) => 0,
            Err(_) => -1,
        },
        None => -1,
    }
}

#[no_mangle]
pub extern "C" fn spt_graph_free(g: *mut FfiGraph) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

/// Freezes the graph on first use. Returns null on invalid vertices.
#[no_mangle]
pub extern "C" fn spt_shortest_path(g: *mut FfiGraph, start: size_t, end: size_t) -> *mut SptPath {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    let ffi = unsafe { &mut *g };
    if let Some(builder) = ffi.builder.take() {
        ffi.graph = Some(builder.build());
    }
    let graph = match ffi.graph.as_ref() {
        Some(graph) => graph,
        None => return std::ptr::null_mut(),
    };

    match shortest_path(graph, start, end) {
        Ok(result) => {
            let vertices = result.path.into_boxed_slice();
            let len = vertices.len();
            Box::into_raw(Box::new(SptPath {
                distance: result.distance.value().unwrap_or(-1),
                vertices: Box::into_raw(vertices) as *mut size_t,
                len,
            }))
        }
        Err(_) => std::ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn spt_path_free(path: *mut SptPath) {
    if !path.is_null() {
        unsafe {
            let path = Box::from_raw(path);
            if !path.vertices.is_null() {
                let slice = std::ptr::slice_from_raw_parts_mut(path.vertices, path.len);
                drop(Box::from_raw(slice));
            }
        }
    }
}
